//! Integration tests for `SqliteStore` against an in-memory database.

use jotter_core::{
  account::AccountId,
  store::{CredentialStore, NoteStore},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Accounts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_look_up_account() {
  let s = store().await;

  let account = s.create("alice", "$argon2id$fake").await.unwrap();
  assert_eq!(account.username, "alice");

  assert!(s.exists("alice").await.unwrap());
  assert_eq!(s.lookup_hash("alice").await.unwrap(), "$argon2id$fake");
  assert_eq!(s.lookup_id("alice").await.unwrap(), account.account_id);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
  let s = store().await;

  assert!(!s.exists("nobody").await.unwrap());
  assert!(matches!(
    s.lookup_hash("nobody").await,
    Err(Error::UserNotFound(name)) if name == "nobody"
  ));
  assert!(matches!(
    s.lookup_id("nobody").await,
    Err(Error::UserNotFound(_))
  ));
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
  let s = store().await;

  let first = s.create("alice", "hash-1").await.unwrap();
  let err = s.create("alice", "hash-2").await.unwrap_err();
  assert!(matches!(err, Error::DuplicateUsername(ref name) if name == "alice"));

  // The original account is untouched.
  assert_eq!(s.lookup_hash("alice").await.unwrap(), "hash-1");
  assert_eq!(s.lookup_id("alice").await.unwrap(), first.account_id);
}

#[tokio::test]
async fn concurrent_registrations_yield_one_account() {
  let s = store().await;

  let attempts = (0..8).map(|i| {
    let s = s.clone();
    tokio::spawn(async move { s.create("racer", &format!("hash-{i}")).await })
  });

  let mut created = 0;
  let mut duplicates = 0;
  for handle in attempts.collect::<Vec<_>>() {
    match handle.await.unwrap() {
      Ok(_) => created += 1,
      Err(Error::DuplicateUsername(_)) => duplicates += 1,
      Err(e) => panic!("unexpected error: {e}"),
    }
  }
  assert_eq!(created, 1);
  assert_eq!(duplicates, 7);
}

#[tokio::test]
async fn store_errors_map_onto_core_taxonomy() {
  let s = store().await;
  s.create("alice", "h").await.unwrap();

  let dup: jotter_core::Error = s.create("alice", "h").await.unwrap_err().into();
  assert!(matches!(dup, jotter_core::Error::DuplicateUsername(_)));

  let missing: jotter_core::Error = s.lookup_hash("bob").await.unwrap_err().into();
  assert!(matches!(missing, jotter_core::Error::UserNotFound(_)));
}

// ─── Notes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn notes_are_listed_in_insertion_order() {
  let s = store().await;
  let owner = s.create("alice", "h").await.unwrap().account_id;

  for text in ["first", "второй", "third 🦀"] {
    s.insert_note(owner, text).await.unwrap();
  }

  let notes = s.list_notes(owner).await.unwrap();
  let texts: Vec<&str> = notes.iter().map(|n| n.text.as_str()).collect();
  assert_eq!(texts, ["first", "второй", "third 🦀"]);
  assert!(notes.iter().all(|n| n.owner_id == owner));
}

#[tokio::test]
async fn notes_are_scoped_to_their_owner() {
  let s = store().await;
  let alice = s.create("alice", "h").await.unwrap().account_id;
  let bob = s.create("bob", "h").await.unwrap().account_id;

  s.insert_note(alice, "alice's note").await.unwrap();
  s.insert_note(bob, "bob's note").await.unwrap();

  let notes = s.list_notes(alice).await.unwrap();
  assert_eq!(notes.len(), 1);
  assert_eq!(notes[0].text, "alice's note");
}

#[tokio::test]
async fn empty_note_round_trips() {
  let s = store().await;
  let owner = s.create("alice", "h").await.unwrap().account_id;

  let note = s.insert_note(owner, "").await.unwrap();
  let notes = s.list_notes(owner).await.unwrap();
  assert_eq!(notes, vec![note]);
}

#[tokio::test]
async fn owner_without_notes_gets_empty_list() {
  let s = store().await;
  assert!(s.list_notes(AccountId::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn note_for_unknown_owner_is_a_database_error() {
  let s = store().await;
  let err = s.insert_note(AccountId::new(), "orphan").await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
}
