//! Host-side helper.
//!
//! `blogfx check-post <file>` validates a post before publishing;
//! `blogfx serve` builds the WASM bundle into `static/pkg` and serves
//! `static/` locally for a preview.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::path::{Path, PathBuf};
    use std::process::{Command, ExitCode};

    use clap::{Parser, Subcommand};

    #[derive(Parser)]
    #[command(name = "blogfx", about = "Blog enhancement tooling")]
    struct Cli {
        #[command(subcommand)]
        command: Cmd,
    }

    #[derive(Subcommand)]
    enum Cmd {
        /// Check a post's filename and front matter
        CheckPost {
            /// e.g. _posts/2024-03-09-my-post.md
            file: PathBuf,
        },
        /// Build the WASM bundle and serve static/ for a local preview
        Serve {
            #[arg(long, default_value_t = 8000)]
            port: u16,
        },
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        match Cli::parse().command {
            Cmd::CheckPost { file } => check_post(&file),
            Cmd::Serve { port } => serve(port),
        }
    }

    fn check_post(file: &Path) -> ExitCode {
        if !file.exists() {
            log::error!("file '{}' not found", file.display());
            return ExitCode::FAILURE;
        }
        log::info!("checking {}", file.display());
        match blogfx::post::check_post(file) {
            Ok(report) => {
                println!("{}", report.preview());
                log::info!("post is ready to publish");
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        }
    }

    fn serve(port: u16) -> ExitCode {
        log::info!("building WASM pkg");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(_) => {
                log::error!("wasm-pack finished with errors");
                return ExitCode::FAILURE;
            }
            Err(_) => log::warn!("wasm-pack not found in PATH; serving whatever is in static/pkg"),
        }

        log::info!("serving static/ at http://127.0.0.1:{port}");
        let status = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .status();
        match status {
            Ok(st) if st.success() => ExitCode::SUCCESS,
            Ok(st) => {
                log::error!("http server exited with {st}");
                ExitCode::FAILURE
            }
            Err(err) => {
                log::error!("could not start http server: {err}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
