//! Example simulating a parallel copy reporting to one progress bar.
//!
//! Run with `RUST_LOG=copybar=debug` to see the actor lifecycle on stderr.

use color_eyre::Result;
use copybar::{Caption, CopyBar, CopyBarBuilder};
use futures::stream::{self, StreamExt};
use rand::Rng;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

const CHUNK: usize = 16 * 1024;
const CONCURRENT_COPIES: usize = 4;

/// A file to copy: its path, its content and where its upload breaks, if it does.
struct Job {
    path: String,
    content: Vec<u8>,
    fail_after: Option<usize>,
}

async fn copy_file(bar: CopyBar, job: Job) -> io::Result<()> {
    bar.set_caption(Caption::new(job.path.as_str(), '/')).await;

    let mut reader = bar.proxy_reader(&job.content[..]);
    let mut sink = tokio::io::sink();
    let mut buf = vec![0u8; CHUNK];
    let mut copied = 0;
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        if job.fail_after.is_some_and(|limit| copied + n > limit) {
            // Upload failed: undo this chunk, then skip the rest of the file.
            bar.error_on_write(n as u64).await;
            bar.error_on_read((job.content.len() - copied) as u64).await;
            break;
        }
        sink.write_all(&buf[..n]).await?;
        copied += n;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut rng = rand::rng();
    let jobs: Vec<Job> = (0..12)
        .map(|i| {
            let size = rng.random_range(256 * 1024..4 * 1024 * 1024);
            let fail_after = rng.random_bool(0.2).then(|| rng.random_range(0..size));
            Job {
                path: format!("/mnt/source/collection-{:02}/part-{i}.bin", i % 4),
                content: vec![0u8; size],
                fail_after,
            }
        })
        .collect();

    let bar = CopyBarBuilder::new().build();

    // Announce everything up front so the bar knows the full size.
    for job in &jobs {
        bar.extend(job.content.len() as u64).await;
    }

    let results = stream::iter(jobs)
        .map(|job| copy_file(bar.clone(), job))
        .buffer_unordered(CONCURRENT_COPIES)
        .collect::<Vec<_>>()
        .await;
    for result in results {
        result?;
    }

    let summary = bar.finish().await?;
    eprintln!(
        "\nCopied {} of {} bytes ({} bytes read).",
        summary.position(),
        summary.total(),
        summary.bytes_read()
    );

    Ok(())
}
