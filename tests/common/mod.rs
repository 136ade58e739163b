use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const ENV_OVERRIDES: &[&str] = &[
    "TRANSCRIPT_ANALYZER_GEMINI_API_KEY",
    "TRANSCRIPT_ANALYZER_ACCESS_TOKEN",
    "TRANSCRIPT_ANALYZER_PROJECT_ID",
    "TRANSCRIPT_ANALYZER_LOCATION",
    "PROJECT_ID",
    "RUST_LOG",
];

pub fn run_analyzer(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_transcript-analyzer"));
        command
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path());
        for key in ENV_OVERRIDES {
            command.env_remove(key);
        }
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("failed to execute transcript-analyzer binary")
    }

    #[allow(dead_code)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn transcript-analyzer binary");

        child
            .stdin
            .take()
            .expect("child stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("write child stdin");

        child
            .wait_with_output()
            .expect("failed to wait for transcript-analyzer binary")
    }

    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.data.path().join(name);
        std::fs::write(&path, contents).expect("write test input file");
        path
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }
}

/// Start a local HTTP server that answers every request with the same reply.
///
/// Returns an endpoint suitable for `llm.endpoint`. The server lives until the
/// test runtime shuts down.
#[allow(dead_code)]
pub async fn spawn_model_stub(status: &'static str, body: String) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind model stub");
    let endpoint = format!(
        "http://{}/v1beta",
        listener.local_addr().expect("model stub address")
    );

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let body = body.clone();

            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut chunk = [0u8; 4096];
                loop {
                    let n = match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => n,
                    };
                    request.extend_from_slice(&chunk[..n]);

                    let text = String::from_utf8_lossy(&request);
                    if let Some(head_end) = text.find("\r\n\r\n") {
                        let content_length = text[..head_end]
                            .lines()
                            .filter_map(|line| line.split_once(':'))
                            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                            .unwrap_or(0);
                        if request.len() >= head_end + 4 + content_length {
                            break;
                        }
                    }
                }

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    endpoint
}

/// Config pointing the gemini provider at `endpoint`.
#[allow(dead_code)]
pub fn gemini_config(endpoint: &str) -> String {
    format!(
        "[llm]\nprovider = \"gemini\"\napi_key = \"test-key\"\nendpoint = \"{}\"\ntimeout_secs = 10\n",
        endpoint
    )
}
