use std::thread;
use std::time::Duration;
use stopwatch::Stopwatch;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .with_file(true)
        .with_line_number(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut sw = Stopwatch::new();

    for lap in 0..3 {
        sw.start();
        thread::sleep(Duration::from_millis(200));
        sw.stop();
        thread::sleep(Duration::from_millis(100));

        let elapsed = serde_json::to_string(&sw.elapsed())?;
        tracing::info!(lap, %elapsed, "lap finished");
    }

    // Ignored: the stopwatch is already stopped.
    sw.stop();

    sw.start();
    thread::sleep(Duration::from_millis(50));
    sw.restart();
    tracing::info!(elapsed = ?sw.elapsed(), "restarted");

    println!("{}", serde_json::to_string_pretty(&sw.elapsed())?);

    Ok(())
}
