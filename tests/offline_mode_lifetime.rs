mod common;

use common::TestContext;
use serial_test::serial;
use usecase_gen::{FallbackReason, generate_use_cases};

#[test]
#[serial]
fn token_set_after_first_call_keeps_process_offline() {
    let _ctx = TestContext::new();

    let first = generate_use_cases("Retail", "Store manager", "stockouts", None).unwrap();
    assert_eq!(first.fallback, Some(FallbackReason::MissingCredential));

    unsafe {
        std::env::set_var("HF_TOKEN", "hf_late");
    }

    let second = generate_use_cases("Retail", "Store manager", "stockouts", None).unwrap();
    assert_eq!(second.fallback, Some(FallbackReason::MissingCredential));
    assert_eq!(second.output(), first.output());
}
