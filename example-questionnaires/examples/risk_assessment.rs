use async_trait::async_trait;
use example_questionnaires::{demo_responses, risk_assessment};
use questionnaire::{Advance, Finalizer, ResponseMap, WizardConfig, WizardSession};
use tracing_subscriber::EnvFilter;

/// Prints the submitted answers instead of sending them anywhere.
struct PrintFinalizer;

#[async_trait]
impl Finalizer for PrintFinalizer {
    async fn finalize(&self, responses: &ResponseMap) -> anyhow::Result<()> {
        tracing::info!(answers = responses.len(), "submitting assessment");
        println!("{}", serde_json::to_string_pretty(responses)?);
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut session = WizardSession::with_config(risk_assessment(), WizardConfig::default())?
        .with_responses(demo_responses())?;

    println!("=== Resuming a saved assessment ===");
    println!("Steps: {}", session.step_labels().join(" > "));
    println!("Progress: {}%\n", session.progress().percent());

    loop {
        let label = session.step_labels()[session.active_step()].clone();
        match session.next() {
            Advance::Moved { to, .. } => println!("{label}: done, moving to step {}", to + 1),
            Advance::Finished { .. } => {
                println!("{label}: done, all steps complete");
                break;
            }
            Advance::Blocked { missing, .. } => {
                println!("{label}: still open");
                for id in missing {
                    let message = session.errors().get(&id).cloned().unwrap_or_default();
                    println!("  question {id}: {message}");
                    // Answer the first option, as a user would on this screen.
                    session.answer(id, "Yes")?;
                }
            }
            Advance::Busy => break,
        }
    }

    let target = session.submit(&PrintFinalizer).await?;
    println!("\nNavigate to: {target}");
    Ok(())
}
