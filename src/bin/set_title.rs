//! Demo: a button click in the page posts `{input: ...}` over IPC; the
//! handler echoes the payload and renames the window to "Lucy".

use tracing::error;
use tracing_subscriber::EnvFilter;
use webframe::{Result, TitleAccess, WebFrame, TITLE_SET_OK};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>Console Input Demo</title>
  <style>
    body {
      font-family: Arial, sans-serif;
      padding: 2rem;
      background-color: #f5f5f5;
    }
    .styled-input {
      padding: 0.5rem;
      font-size: 1rem;
      border: 2px solid #ccc;
      border-radius: 4px;
      width: 200px;
      margin-right: 1rem;
      transition: border-color 0.3s;
    }
    .styled-input:focus {
      border-color: #007BFF;
      outline: none;
    }
    .styled-button {
      padding: 0.6rem 1.2rem;
      font-size: 1rem;
      color: #fff;
      background-color: #007BFF;
      border: none;
      border-radius: 4px;
      cursor: pointer;
      transition: background-color 0.3s;
    }
    .styled-button:hover {
      background-color: #0056b3;
    }
  </style>
</head>
<body>

  <h2>Enter Something:</h2>
  <input id="myInput" type="text" class="styled-input" placeholder="Type here...">
  <button id="myButton" class="styled-button">Submit</button>

  <script>
    document.getElementById('myButton').addEventListener('click', function() {
      const val = document.getElementById('myInput').value;
      const obj = { input: val };
      window.ipc.postMessage(JSON.stringify(obj));
    });
  </script>

</body>
</html>
"#;

/// Process one frontend message: echo the raw payload, then rename the
/// window and report the outcome.
///
/// Output goes through `console` so tests can capture the lines. A non-"Ok"
/// outcome produces no extra output.
async fn handle_frontend_message<W, F>(raw: &str, window: &W, console: &mut F) -> Result<()>
where
    W: TitleAccess,
    F: FnMut(String),
{
    console(format!("Received from frontend: {raw}"));

    let outcome = window.set_title("Lucy").await?;
    if outcome == TITLE_SET_OK {
        console("Successfully set window title to 'Lucy'".to_string());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "webframe=info".into()),
        )
        .init();

    WebFrame::new()
        .title("Console Input Demo")
        .html(PAGE)
        .run(|raw, window| async move {
            let mut console = |line: String| println!("{line}");
            if let Err(err) = handle_frontend_message(&raw, &window, &mut console).await {
                error!(%err, "title update failed");
            }
        })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use webframe::{Result, TitleAccess};

    use super::handle_frontend_message;

    /// Title double that records its calls into a shared transcript and
    /// replies with a fixed outcome string.
    struct ScriptedTitles {
        outcome: String,
        transcript: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl TitleAccess for ScriptedTitles {
        async fn set_title(&self, new_title: &str) -> Result<String> {
            self.transcript
                .lock()
                .unwrap()
                .push(format!("set_title({new_title})"));
            Ok(self.outcome.clone())
        }

        async fn get_title(&self) -> Result<String> {
            unreachable!("this demo never reads the title")
        }
    }

    fn run_handler(raw: &str, outcome: &str) -> Vec<String> {
        let transcript = Arc::new(Mutex::new(Vec::new()));
        let titles = ScriptedTitles {
            outcome: outcome.to_string(),
            transcript: transcript.clone(),
        };
        let sink = transcript.clone();
        let mut console = move |line: String| sink.lock().unwrap().push(format!("log: {line}"));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime
            .block_on(handle_frontend_message(raw, &titles, &mut console))
            .unwrap();

        let lines = transcript.lock().unwrap().clone();
        lines
    }

    #[test]
    fn payload_is_echoed_before_the_title_mutation() {
        let transcript = run_handler(r#"{"input":"hello"}"#, "Ok");
        assert_eq!(
            transcript,
            vec![
                r#"log: Received from frontend: {"input":"hello"}"#.to_string(),
                "set_title(Lucy)".to_string(),
                "log: Successfully set window title to 'Lucy'".to_string(),
            ]
        );
    }

    #[test]
    fn failure_outcome_is_silently_dropped() {
        let transcript = run_handler(r#"{"input":"hello"}"#, "Err");
        assert_eq!(
            transcript,
            vec![
                r#"log: Received from frontend: {"input":"hello"}"#.to_string(),
                "set_title(Lucy)".to_string(),
            ]
        );
    }

    #[test]
    fn payload_is_not_validated_as_json() {
        let transcript = run_handler("not json at all", "Ok");
        assert_eq!(transcript[0], "log: Received from frontend: not json at all");
    }

    #[test]
    fn repeated_delivery_is_idempotent() {
        let first = run_handler(r#"{"input":"again"}"#, "Ok");
        let second = run_handler(r#"{"input":"again"}"#, "Ok");
        assert_eq!(first, second);
    }
}
