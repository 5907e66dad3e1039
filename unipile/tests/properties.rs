//! Properties of the response cleaners over arbitrary input

#![allow(clippy::unwrap_used)] // Test code

use outreach_unipile::cleaners::{
    clean_chat_messages, clean_chats, clean_company_profile, clean_company_search_results,
    clean_invitations_received, clean_people_search, clean_post_comments, clean_user_posts,
    clean_user_profile, clean_user_relations,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map(
                prop_oneof![
                    Just("items".to_string()),
                    Just("attendees".to_string()),
                    Just("locations".to_string()),
                    Just("author".to_string()),
                    "[a-z_]{1,10}",
                ],
                inner,
                0..4
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(0)),
        Just(json!(false)),
        Just(json!("")),
        "[a-z]{1,8}".prop_map(Value::String),
        any::<i64>().prop_map(|n| json!(n)),
    ]
}

fn company_location() -> impl Strategy<Value = Value> {
    (any::<Option<bool>>(), "[A-Z][a-z]{1,6}")
        .prop_map(|(hq, city)| json!({"city": city, "is_headquarter": hq}))
}

proptest! {
    #[test]
    fn cleaners_never_panic_on_arbitrary_json(body in arbitrary_json()) {
        let _ = clean_user_profile(&body);
        let _ = clean_user_relations(&body);
        let _ = clean_invitations_received(&body);
        let _ = clean_people_search(&body);
        let _ = clean_user_posts(&body);
        let _ = clean_post_comments(&body);
        let _ = clean_chats(&body);
        let _ = clean_chat_messages(&body);
        let _ = clean_company_profile(&body);
        let _ = clean_company_search_results(&body);
    }

    #[test]
    fn non_object_bodies_yield_empty_collections(body in scalar()) {
        let cleaned = [
            (
                serde_json::to_value(clean_user_relations(&body)).unwrap(),
                json!({"connections": []}),
            ),
            (serde_json::to_value(clean_chats(&body)).unwrap(), json!({"chats": []})),
            (serde_json::to_value(clean_chat_messages(&body)).unwrap(), json!({"messages": []})),
            (serde_json::to_value(clean_user_posts(&body)).unwrap(), json!({"posts": []})),
            (serde_json::to_value(clean_post_comments(&body)).unwrap(), json!({"comments": []})),
            (
                serde_json::to_value(clean_company_search_results(&body)).unwrap(),
                json!({"companies": []}),
            ),
        ];
        for (actual, expected) in cleaned {
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn company_collections_always_serialize(body in arbitrary_json()) {
        if let Some(company) = clean_company_profile(&body) {
            let value = serde_json::to_value(company).unwrap();
            prop_assert!(value["industry"].is_array());
            prop_assert!(value["locations"].is_array());
            prop_assert!(value["hashtags"].is_array());
            prop_assert!(value.get("headquarters").is_some());
        }
    }

    #[test]
    fn headquarters_is_first_flagged_location(
        locations in prop::collection::vec(company_location(), 0..6)
    ) {
        let expected = locations
            .iter()
            .find(|location| location["is_headquarter"] == json!(true))
            .map(|location| {
                let city = location["city"].clone();
                json!({"city": city, "is_headquarter": true})
            })
            .unwrap_or(Value::Null);

        let body = json!({"name": "Acme", "locations": locations.clone()});
        let company = clean_company_profile(&body).unwrap();
        let value = serde_json::to_value(company).unwrap();

        prop_assert_eq!(&value["headquarters"], &expected);
        prop_assert_eq!(value["locations"].as_array().unwrap().len(), locations.len());
    }

    #[test]
    fn chat_attendees_always_have_a_name(
        first in proptest::option::of("[A-Z][a-z]{0,6}"),
        last in proptest::option::of("[A-Z][a-z]{0,6}")
    ) {
        let attendee = json!({"first_name": first.clone(), "last_name": last.clone()});
        let chats = clean_chats(&json!({"items": [{"id": "c", "attendees": [attendee]}]}));
        let name = &chats.chats[0].attendees[0].name;
        let expected = format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default());
        prop_assert_eq!(name, &expected);
    }

    #[test]
    fn mistyped_field_never_drops_valid_siblings(
        field in prop_oneof![
            Just("last_name"),
            Just("headline"),
            Just("location"),
            Just("provider_id"),
            Just("follower_count"),
            Just("is_premium"),
        ],
        noise in arbitrary_json()
    ) {
        let mut body = json!({"first_name": "Jane", "public_identifier": "janedoe"});
        body[field] = noise;

        let profile = clean_user_profile(&body).unwrap();
        prop_assert_eq!(profile.first_name.as_deref(), Some("Jane"));
        prop_assert_eq!(profile.public_identifier.as_deref(), Some("janedoe"));
    }
}
