use linkedin_relay::{
    config::ConfigStore,
    management::{MAX_PENDING_STATES, StateManager, TokenHolder},
    types::Token,
};

#[test]
fn test_new_holder_is_empty() {
    let holder = TokenHolder::new();

    assert_eq!(holder.current_token(), None);
    assert_eq!(holder.current_actor(), None);
}

#[test]
fn test_set_and_clear_token() {
    let holder = TokenHolder::new();
    holder.set_token(Token {
        access_token: "tok_abc".to_string(),
        expires_in: Some(5184000),
    });

    let token = holder.current_token().unwrap();
    assert_eq!(token.access_token, "tok_abc");
    assert_eq!(token.expires_in, Some(5184000));

    holder.clear_token();
    assert_eq!(holder.current_token(), None);
}

#[test]
fn test_set_actor_first_write_wins() {
    let holder = TokenHolder::new();

    assert!(holder.set_actor("urn:li:person:first"));
    assert!(!holder.set_actor("urn:li:person:second"));
    assert_eq!(
        holder.current_actor(),
        Some("urn:li:person:first".to_string())
    );
}

#[test]
fn test_clear_token_keeps_actor() {
    let holder = TokenHolder::new();
    holder.set_token(Token::new("tok"));
    holder.set_actor("urn:li:person:u1");

    holder.clear_token();

    assert_eq!(holder.current_actor(), Some("urn:li:person:u1".to_string()));
}

#[test]
fn test_from_store_seeds_token_and_actor() {
    let store = ConfigStore::from_lines(
        "unused.env",
        vec![
            "LINKEDIN_TOKEN=tok_abc".to_string(),
            "LINKEDIN_PROFILE_URN=urn:li:person:u1".to_string(),
        ],
    );
    let holder = TokenHolder::from_store(&store);

    assert_eq!(holder.current_token(), Some(Token::new("tok_abc")));
    assert_eq!(holder.current_actor(), Some("urn:li:person:u1".to_string()));
}

#[test]
fn test_from_store_treats_empty_token_as_absent() {
    let store = ConfigStore::from_lines(
        "unused.env",
        vec!["LINKEDIN_TOKEN=".to_string(), "LINKEDIN_PROFILE_URN=".to_string()],
    );
    let holder = TokenHolder::from_store(&store);

    assert_eq!(holder.current_token(), None);
    assert_eq!(holder.current_actor(), None);
}

#[test]
fn test_state_is_accepted_once() {
    let states = StateManager::new();
    let state = states.issue();

    assert!(states.has(&state));
    assert!(states.consume(&state));
    assert!(!states.consume(&state));
    assert!(states.is_empty());
}

#[test]
fn test_unknown_state_is_rejected() {
    let states = StateManager::new();
    states.issue();

    assert!(!states.consume("forged"));
    assert_eq!(states.len(), 1);
}

#[test]
fn test_pending_states_are_capped() {
    let states = StateManager::new();
    let first = states.issue();

    let mut last = String::new();
    for _ in 0..MAX_PENDING_STATES + 10 {
        last = states.issue();
    }

    assert_eq!(states.len(), MAX_PENDING_STATES);
    assert!(!states.has(&first));
    assert!(states.has(&last));
}
