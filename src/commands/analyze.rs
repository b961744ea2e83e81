//! `repotell analyze` command.

use std::io::Write;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::pipeline::{self, AnalysisReport};
use crate::ports::repo_host::parse_repo_url;
use crate::video::render_narration;

/// Execute the `analyze` command.
///
/// Prints the generated narrative to stdout and a stats line to stderr;
/// with `--video`, feeds the narrative to the rendering path afterwards.
///
/// # Errors
///
/// Returns an error string for malformed URLs, missing credentials, and
/// host/service failures.
pub fn run(
    config: &Config,
    repo_url: &str,
    prompt: &str,
    stream: bool,
    video: bool,
) -> Result<(), String> {
    // Validate the URL before touching credentials or the network.
    parse_repo_url(repo_url).map_err(|e| e.to_string())?;

    let ctx = ServiceContext::live(config).map_err(|e| e.to_string())?;
    let runtime = super::runtime()?;

    eprintln!("Analyzing repository: {repo_url}");
    let report = runtime.block_on(run_pipeline(&ctx, repo_url, prompt, stream))?;

    eprintln!(
        "Analyzed {}: {} files, {} directories, {:.2} KB",
        report.repo_name, report.stats.total_files, report.stats.total_dirs,
        report.stats.total_size_kb
    );

    if video {
        eprintln!("Rendering narration video...");
        let outcome = runtime
            .block_on(render_narration(&ctx, config, &report.summary))
            .map_err(|e| e.to_string())?;
        println!("Video ready: {}", outcome.video_url);
    }

    Ok(())
}

async fn run_pipeline(
    ctx: &ServiceContext,
    repo_url: &str,
    prompt: &str,
    stream: bool,
) -> Result<AnalysisReport, String> {
    if stream {
        let mut stdout = std::io::stdout();
        let report = pipeline::analyze_streaming(
            ctx,
            repo_url,
            prompt,
            Box::new(move |chunk| {
                let _ = write!(stdout, "{chunk}");
                let _ = stdout.flush();
            }),
        )
        .await
        .map_err(|e| e.to_string())?;
        println!();
        Ok(report)
    } else {
        let report = pipeline::analyze(ctx, repo_url, prompt).await.map_err(|e| e.to_string())?;
        println!("{}", report.summary);
        Ok(report)
    }
}
