//! Integration tests for the add-book submission flow against a live store.

mod support;

use std::time::Duration;

use bookshelf::{
    AddBookForm, CatalogConfig, CatalogStore, ChangeKind, Field, InMemoryCatalogStore,
    Route, SubmissionState, SubmitOutcome, DEFAULT_COVER_IMAGE,
};
use support::listener::Recorder;

fn config() -> CatalogConfig {
    CatalogConfig::from_json_str(r#"{ "submitDelayMs": 1000 }"#).unwrap()
}

fn fill(form: &mut AddBookForm, title: &str) {
    form.set_field(Field::Title, title).unwrap();
    form.set_field(Field::Author, "Ursula K. Le Guin").unwrap();
    form.set_field(Field::Category, "Sci-Fi").unwrap();
    form.set_field(Field::Description, "  An anarchist moon and its propertarian twin.  ")
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn submitted_book_is_admitted_and_announced() {
    let config = config();
    let store = InMemoryCatalogStore::from_config(&config);
    let recorder = Recorder::attach(&store);

    let mut form = AddBookForm::new(&config);
    fill(&mut form, "The Dispossessed");
    form.set_field(Field::Rating, "5").unwrap();

    let outcome = form.submit(&store).await.unwrap();
    let SubmitOutcome::Submitted { book, redirect } = outcome else {
        panic!("expected the form to submit");
    };

    assert_eq!(redirect, Route::browse());
    assert_eq!(form.state(), SubmissionState::Submitted);
    assert_eq!(book.rating, 0.0);
    assert_eq!(book.cover_image, DEFAULT_COVER_IMAGE);
    // values are stored as typed
    assert_eq!(
        book.description,
        "  An anarchist moon and its propertarian twin.  "
    );

    let snapshot = store.get_catalog().unwrap();
    assert_eq!(snapshot.books()[0], book);

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, ChangeKind::Added);
    assert_eq!(seen[0].book_id, book.id);
}

#[tokio::test(start_paused = true)]
async fn uploaded_cover_is_kept_as_data_uri() {
    let config = config();
    let store = InMemoryCatalogStore::from_config(&config);
    let mut form = AddBookForm::new(&config);
    fill(&mut form, "The Left Hand of Darkness");
    form.attach_cover("image/jpeg", &[0xff, 0xd8, 0xff]).unwrap();

    let SubmitOutcome::Submitted { book, .. } = form.submit(&store).await.unwrap() else {
        panic!("expected the form to submit");
    };
    assert_eq!(book.cover_image, "data:image/jpeg;base64,/9j/");
}

#[tokio::test]
async fn rejected_form_adds_nothing_and_reports_every_field() {
    let store = InMemoryCatalogStore::seeded();
    let recorder = Recorder::attach(&store);
    let mut form = AddBookForm::with_settings(DEFAULT_COVER_IMAGE, Duration::ZERO);
    form.set_field(Field::Description, "too short").unwrap();
    form.set_field(Field::Rating, "7").unwrap();

    let SubmitOutcome::Invalid(errors) = form.submit(&store).await.unwrap() else {
        panic!("expected the form to be rejected");
    };

    let messages = errors.messages();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages["title"], "Title is required");
    assert_eq!(messages["author"], "Author is required");
    assert_eq!(messages["category"], "Category is required");
    assert_eq!(
        messages["description"],
        "Description must be at least 10 characters long"
    );
    assert_eq!(messages["rating"], "Rating must be between 0 and 5");

    assert_eq!(form.state(), SubmissionState::Editing);
    assert_eq!(form.errors(), &errors);
    assert_eq!(store.get_catalog().unwrap().books().len(), 8);
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn form_can_be_fixed_and_resubmitted() {
    let store = InMemoryCatalogStore::seeded();
    let mut form = AddBookForm::with_settings(DEFAULT_COVER_IMAGE, Duration::ZERO);
    fill(&mut form, "");

    assert!(matches!(
        form.submit(&store).await.unwrap(),
        SubmitOutcome::Invalid(_)
    ));

    form.set_field(Field::Title, "The Lathe of Heaven").unwrap();
    assert!(form.errors().is_empty());
    assert!(matches!(
        form.submit(&store).await.unwrap(),
        SubmitOutcome::Submitted { .. }
    ));
    assert_eq!(
        store.get_catalog().unwrap().books()[0].title,
        "The Lathe of Heaven"
    );
}

#[tokio::test]
async fn reset_clears_values_and_errors() {
    let store = InMemoryCatalogStore::seeded();
    let mut form = AddBookForm::with_settings(DEFAULT_COVER_IMAGE, Duration::ZERO);
    form.set_field(Field::Title, "Draft").unwrap();
    form.submit(&store).await.unwrap();
    assert!(!form.errors().is_empty());

    form.reset().unwrap();
    assert_eq!(form.values(), &bookshelf::BookForm::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.state(), SubmissionState::Editing);
}
