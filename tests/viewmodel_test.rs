//! Viewmodel integration tests: the observable state slot over the full
//! pipeline (mock API -> repository -> use case -> viewmodel).

mod common;

use common::{chernobyl_page, init_tracing, view_model_over};
use showfeed::adapters::mock::MockShowsApi;
use showfeed::error::FetchError;
use showfeed::resource::Status;
use showfeed::view_state::FeedViewState;
use tokio::sync::broadcast;

async fn next_state(observer: &mut broadcast::Receiver<FeedViewState>) -> FeedViewState {
    observer.recv().await.expect("state published")
}

#[tokio::test]
async fn test_should_show_loading_state_first() {
    init_tracing();
    let api = MockShowsApi::new();
    api.enqueue_ok(chernobyl_page(11));
    let vm = view_model_over(api);
    let mut observer = vm.observe_state();

    vm.fetch(1);

    let first = next_state(&mut observer).await;
    assert!(first.is_loading());
    assert!(first.shows().is_empty());
    assert!(!first.should_show_error());
}

#[tokio::test]
async fn test_should_show_success_state_with_fetched_shows() {
    let api = MockShowsApi::new();
    api.enqueue_ok(chernobyl_page(11));
    let vm = view_model_over(api);
    let mut observer = vm.observe_state();

    vm.fetch(1);

    let _loading = next_state(&mut observer).await;
    let second = next_state(&mut observer).await;
    assert_eq!(second.status(), Status::Success);
    assert_eq!(second.shows().len(), 11);
    assert_eq!(second.shows()[0].name, "Chernobyl");
    assert_eq!(second.shows()[0].rating, "8.3");
    assert!(second.error_message().is_none());
}

#[tokio::test]
async fn test_should_show_error_state_on_failure() {
    let api = MockShowsApi::new();
    api.enqueue_err(FetchError::new("unhandled exception"));
    let vm = view_model_over(api);
    let mut observer = vm.observe_state();

    vm.fetch(1);

    let _loading = next_state(&mut observer).await;
    let second = next_state(&mut observer).await;
    assert_eq!(second.status(), Status::Error);
    assert!(second.should_show_error());
    assert_eq!(second.error_message(), Some("unhandled exception"));
    assert!(second.shows().is_empty());
}

#[tokio::test]
async fn test_two_observers_receive_identical_sequences() {
    let api = MockShowsApi::new();
    api.enqueue_ok(chernobyl_page(3));
    let vm = view_model_over(api);
    let mut first_observer = vm.observe_state();
    let mut second_observer = vm.observe_state();

    vm.fetch(1);

    for _ in 0..2 {
        let a = next_state(&mut first_observer).await;
        let b = next_state(&mut second_observer).await;
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn test_current_state_holds_terminal_outcome() {
    let api = MockShowsApi::new();
    api.enqueue_ok(chernobyl_page(2));
    let vm = view_model_over(api);
    let mut observer = vm.observe_state();

    vm.fetch(1);
    let _loading = next_state(&mut observer).await;
    let terminal = next_state(&mut observer).await;

    assert_eq!(vm.current_state(), Some(terminal));
}

#[tokio::test]
async fn test_sequential_fetches_run_through_idle_again() {
    let api = MockShowsApi::new();
    api.enqueue_ok(chernobyl_page(1));
    api.enqueue_err(FetchError::new("second page unavailable"));
    let vm = view_model_over(api);
    let mut observer = vm.observe_state();

    vm.fetch(1);
    let _loading = next_state(&mut observer).await;
    let first_terminal = next_state(&mut observer).await;
    assert_eq!(first_terminal.status(), Status::Success);

    vm.fetch(2);
    let reloading = next_state(&mut observer).await;
    assert!(reloading.is_loading());
    let second_terminal = next_state(&mut observer).await;
    assert_eq!(second_terminal.status(), Status::Error);
    assert_eq!(
        second_terminal.error_message(),
        Some("second page unavailable")
    );
}
