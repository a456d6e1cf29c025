use std::error::Error;
use std::time::Duration;

use watch::engine::{Runtime, Termination};
use watch::errors::WatchError;
use watch::exec::OutputMode;
use watch::report::FailureReporter;
use watch_test_utils::builders::WatchConfigBuilder;
use watch_test_utils::fake_executor::FakeExecutor;
use watch_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn failure_lines(report: &[u8]) -> usize {
    String::from_utf8_lossy(report)
        .lines()
        .filter(|l| l.contains("exit: "))
        .count()
}

#[tokio::test]
async fn successful_command_keeps_running_until_shutdown() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("true").halt_on_failure(true).build();
    let (fake, shutdown) = FakeExecutor::always(0).stop_after(5);
    let runs = fake.runs();

    let mut report = Vec::new();
    let runtime = Runtime::new(&cfg, fake, FailureReporter::new(&mut report));
    let termination = with_timeout(runtime.run(shutdown)).await?;

    assert_eq!(termination, Termination::Interrupted);
    assert_eq!(termination.exit_code(), 130);
    assert_eq!(runs.lock().unwrap().len(), 5);
    assert!(report.is_empty(), "no diagnostics expected for exit 0");

    Ok(())
}

#[tokio::test]
async fn failures_without_halt_are_reported_every_iteration() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("exit 7").build();
    let (fake, shutdown) = FakeExecutor::always(7).stop_after(3);
    let runs = fake.runs();

    let mut report = Vec::new();
    let runtime = Runtime::new(&cfg, fake, FailureReporter::new(&mut report));
    let termination = with_timeout(runtime.run(shutdown)).await?;

    assert_eq!(termination, Termination::Interrupted);
    assert_eq!(runs.lock().unwrap().len(), 3);
    assert_eq!(failure_lines(&report), 3);
    assert!(String::from_utf8_lossy(&report).contains("exit: 7"));

    Ok(())
}

#[tokio::test]
async fn halt_exits_with_child_code_after_one_iteration() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("exit 7").halt_on_failure(true).build();
    let fake = FakeExecutor::always(7);
    let runs = fake.runs();

    let mut report = Vec::new();
    let runtime = Runtime::new(&cfg, fake, FailureReporter::new(&mut report));
    let termination = with_timeout(runtime.run(std::future::pending::<()>())).await?;

    assert_eq!(termination, Termination::Halted(7));
    assert_eq!(termination.exit_code(), 7);
    assert_eq!(runs.lock().unwrap().len(), 1);
    assert_eq!(failure_lines(&report), 1);

    Ok(())
}

#[tokio::test]
async fn halt_waits_for_first_failure() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("flaky").halt_on_failure(true).build();
    let fake = FakeExecutor::scripted(vec![0, 0, 3, 0]);
    let runs = fake.runs();

    let mut report = Vec::new();
    let runtime = Runtime::new(&cfg, fake, FailureReporter::new(&mut report));
    let termination = with_timeout(runtime.run(std::future::pending::<()>())).await?;

    assert_eq!(termination, Termination::Halted(3));
    assert_eq!(runs.lock().unwrap().len(), 3);
    assert_eq!(failure_lines(&report), 1);

    Ok(())
}

#[tokio::test]
async fn interval_starts_when_the_previous_run_completes() -> TestResult {
    init_tracing();

    let interval = Duration::from_millis(40);
    let run_time = Duration::from_millis(60);

    let cfg = WatchConfigBuilder::new("slow").interval_ms(40).build();
    let (fake, shutdown) = FakeExecutor::always(0).with_run_time(run_time).stop_after(3);
    let runs = fake.runs();

    let runtime = Runtime::new(&cfg, fake, FailureReporter::new(Vec::new()));
    with_timeout(runtime.run(shutdown)).await?;

    let runs = runs.lock().unwrap();
    assert_eq!(runs.len(), 3);
    for pair in runs.windows(2) {
        let completed_at = pair[0].completed_at.ok_or("earlier run never completed")?;

        let idle = pair[1].started_at.duration_since(completed_at);
        assert!(idle >= interval, "next run started {idle:?} after completion");

        let cycle = pair[1].started_at.duration_since(pair[0].started_at);
        assert!(cycle >= run_time + interval, "cycle was only {cycle:?}");
    }

    Ok(())
}

#[tokio::test]
async fn runtime_passes_command_and_output_mode() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("echo hi").quiet(true).build();
    let (fake, shutdown) = FakeExecutor::always(0).stop_after(1);
    let runs = fake.runs();

    let runtime = Runtime::new(&cfg, fake, FailureReporter::new(Vec::new()));
    with_timeout(runtime.run(shutdown)).await?;

    let runs = runs.lock().unwrap();
    assert_eq!(runs[0].command, "echo hi");
    assert_eq!(runs[0].output, OutputMode::Discard);

    Ok(())
}

#[tokio::test]
async fn spawn_failure_is_fatal() -> TestResult {
    init_tracing();

    let cfg = WatchConfigBuilder::new("true").build();
    let reporter = FailureReporter::new(Vec::new());
    let runtime = Runtime::new(&cfg, FakeExecutor::failing_spawn(), reporter);

    let err = with_timeout(runtime.run(std::future::pending::<()>()))
        .await
        .unwrap_err();
    assert!(matches!(err, WatchError::Spawn { .. }));

    Ok(())
}
