use galeria::gallery::record::Record;
use galeria::gallery::state::{FetchPhase, GalleryState};
use pretty_assertions::assert_eq;

fn record(id: &str, name: &str) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        job_title: "Sin cargo".into(),
        department: "Sin departamento".into(),
        location: "Sin municipio".into(),
        description: "Sin descripción".into(),
        image_url: "https://placehold.co/300".into(),
        more_info_link: None,
    }
}

#[test]
fn initial_state_is_loading_and_empty() {
    let state = GalleryState::new();
    assert_eq!(state.phase(), FetchPhase::Loading);
    assert!(state.records().is_empty());
    assert_eq!(state.error(), None);
}

#[test]
fn phase_names() {
    assert_eq!(FetchPhase::Loading.name(), "Loading");
    assert_eq!(FetchPhase::Ready.name(), "Ready");
    assert_eq!(FetchPhase::Failed.name(), "Failed");
}

#[test]
fn successful_fetch_enters_ready_and_clears_error() {
    let mut state = GalleryState::new();
    let seq = state.begin_fetch();
    assert!(state.complete_fetch(seq, Err("boom".into())));
    assert_eq!(state.phase(), FetchPhase::Failed);

    let seq = state.begin_fetch();
    assert_eq!(state.phase(), FetchPhase::Loading);
    assert!(state.complete_fetch(seq, Ok(vec![record("1", "Ana")])));
    assert_eq!(state.phase(), FetchPhase::Ready);
    assert_eq!(state.error(), None);
    assert_eq!(state.records().len(), 1);
}

#[test]
fn failed_fetch_with_no_records_enters_failed_with_message() {
    // Mirrors an HTTP 500 on first load: error surfaces, retry stays possible
    let mut state = GalleryState::new();
    let seq = state.begin_fetch();
    assert!(state.complete_fetch(seq, Err("Gallery endpoint returned 500".into())));

    assert_eq!(state.phase(), FetchPhase::Failed);
    assert_eq!(state.error(), Some("Gallery endpoint returned 500"));

    // Retry is just another fetch
    state.begin_fetch();
    assert_eq!(state.phase(), FetchPhase::Loading);
}

#[test]
fn failed_refresh_never_replaces_a_loaded_gallery() {
    let mut state = GalleryState::new();
    let seq = state.begin_fetch();
    state.complete_fetch(seq, Ok(vec![record("1", "Ana"), record("2", "Beto")]));

    let seq = state.begin_fetch();
    state.complete_fetch(seq, Err("network down".into()));

    assert_eq!(state.phase(), FetchPhase::Ready);
    assert_eq!(state.records().len(), 2);
    assert_eq!(state.error(), Some("network down"));
}

#[test]
fn stale_responses_are_discarded_so_the_last_fetch_wins() {
    let mut state = GalleryState::new();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    // The first request resolves late; its payload must not land
    assert!(!state.complete_fetch(first, Ok(vec![record("1", "Stale")])));
    assert!(state.records().is_empty());
    assert_eq!(state.phase(), FetchPhase::Loading);

    assert!(state.complete_fetch(second, Ok(vec![record("2", "Fresh")])));
    assert_eq!(state.records()[0].name, "Fresh");

    // Same for a stale error after a fresh success
    let third = state.begin_fetch();
    let fourth = state.begin_fetch();
    assert!(state.complete_fetch(fourth, Ok(vec![record("3", "Newer")])));
    assert!(!state.complete_fetch(third, Err("late failure".into())));
    assert_eq!(state.phase(), FetchPhase::Ready);
    assert_eq!(state.error(), None);
}

#[test]
fn selection_is_independent_of_fetch_state() {
    let mut state = GalleryState::new();
    let seq = state.begin_fetch();
    state.complete_fetch(seq, Ok(vec![record("1", "Ana"), record("2", "Beto")]));

    state.select("2");
    assert_eq!(state.selected_record().unwrap().name, "Beto");

    // A refresh in flight does not drop the selection
    state.begin_fetch();
    assert_eq!(state.selected_record().unwrap().name, "Beto");

    state.clear_selection();
    assert!(state.selected_record().is_none());

    // Selecting an unknown id is a no-op
    state.select("99");
    assert!(state.selected_record().is_none());
}

#[test]
fn wholesale_replacement_prunes_a_dangling_selection() {
    let mut state = GalleryState::new();
    let seq = state.begin_fetch();
    state.complete_fetch(seq, Ok(vec![record("1", "Ana")]));
    state.select("1");

    let seq = state.begin_fetch();
    state.complete_fetch(seq, Ok(vec![record("2", "Beto")]));
    assert!(state.selected_record().is_none());
}

#[test]
fn letter_cycling_walks_all_then_each_letter() {
    let mut state = GalleryState::new();
    let seq = state.begin_fetch();
    state.complete_fetch(
        seq,
        Ok(vec![record("1", "Ana"), record("2", "Beto"), record("3", "Carla")]),
    );
    assert_eq!(state.alphabet(), vec!['A', 'B', 'C']);

    assert_eq!(state.selected_letter, None);
    state.cycle_letter(true);
    assert_eq!(state.selected_letter, Some('A'));
    state.cycle_letter(true);
    assert_eq!(state.selected_letter, Some('B'));
    state.cycle_letter(true);
    state.cycle_letter(true);
    assert_eq!(state.selected_letter, None); // past the end wraps to All

    state.cycle_letter(false);
    assert_eq!(state.selected_letter, Some('C'));
}
