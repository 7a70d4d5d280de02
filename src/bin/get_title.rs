//! Demo: a button click in the page posts `{input: ...}` over IPC; the
//! handler echoes the payload and then reads back the window title.

use tracing::error;
use tracing_subscriber::EnvFilter;
use webframe::{Result, TitleAccess, WebFrame};

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

/// Process one frontend message: echo the raw payload, then read the current
/// window title and log it unconditionally.
async fn handle_frontend_message<W, F>(raw: &str, window: &W, console: &mut F) -> Result<()>
where
    W: TitleAccess,
    F: FnMut(String),
{
    console(format!("Received from frontend: {raw}"));

    let title = window.get_title().await?;
    console(format!("Window Title: {title}"));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "webframe=info".into()),
        )
        .init();

    WebFrame::new()
        .title("MyApp")
        .html(PAGE)
        .run(|raw, window| async move {
            let mut console = |line: String| println!("{line}");
            if let Err(err) = handle_frontend_message(&raw, &window, &mut console).await {
                error!(%err, "title lookup failed");
            }
        })
}
