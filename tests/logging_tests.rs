use data_loader::setup_logging;

#[test]
fn test_logging_setup() {
    // This test verifies that the logging setup function doesn't panic
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        tracing::info!(records = 3, "logging initialised");
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
