use std::process::ExitStatus;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum SpeakerError {
    #[error("Failed to run the speech command")]
    Io(#[from] std::io::Error),
    #[error("The speech command exited with {0}")]
    Failed(ExitStatus),
}

/// Text-to-speech through an external command such as `espeak -v es`.
///
/// The configured command is split on whitespace into a program and its
/// arguments; the text is passed as the last argument. Without a command
/// every utterance is only logged.
#[derive(Clone, Debug, Default)]
pub struct Speaker {
    command: Option<SpeechCommand>,
}

#[derive(Clone, Debug)]
struct SpeechCommand {
    program: String,
    args: Vec<String>,
}

impl Speaker {
    pub fn new(command: Option<String>) -> Self {
        let command = command.and_then(|command| {
            let mut words = command.split_whitespace().map(str::to_owned);
            let program = words.next()?;
            Some(SpeechCommand {
                program,
                args: words.collect(),
            })
        });

        Self { command }
    }

    /// Speaks `text` and waits until playback has finished.
    #[tracing::instrument(name = "Speak", skip(self))]
    pub async fn say(&self, text: &str) -> Result<(), SpeakerError> {
        let Some(command) = &self.command else {
            tracing::debug!("No speech command configured");
            return Ok(());
        };

        let status = Command::new(&command.program)
            .args(&command.args)
            .arg(text)
            .status()
            .await?;
        if status.success() {
            Ok(())
        } else {
            Err(SpeakerError::Failed(status))
        }
    }

    /// Like [`Speaker::say`], logging failures instead of returning them.
    pub async fn say_or_log(&self, text: &str) {
        if let Err(e) = self.say(text).await {
            tracing::warn!(error.cause_chain = ?e, error.message = %e, "Failed to speak");
        }
    }
}
