use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn parse(raw: &str) -> Option<Self> {
                Uuid::parse_str(raw).ok().map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_type!(WebhookId);
id_type!(IncomingWebhookId);
id_type!(LogEntryId);
id_type!(TagId);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! id_unique_test {
        ($name:ident, $test_name:ident) => {
            #[test]
            fn $test_name() {
                let result = $name::new();
                assert_ne!(result.0, $name::new().0)
            }
        };
    }

    id_unique_test!(WebhookId, given_new_webhook_id_when_generated_should_be_unique);
    id_unique_test!(
        IncomingWebhookId,
        given_new_incoming_webhook_id_when_generated_should_be_unique
    );
    id_unique_test!(
        LogEntryId,
        given_new_log_entry_id_when_generated_should_be_unique
    );
    id_unique_test!(TagId, given_new_tag_id_when_generated_should_be_unique);

    #[test]
    fn given_display_output_when_parse_should_round_trip() {
        let id = WebhookId::new();
        assert_eq!(WebhookId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn given_garbage_when_parse_should_return_none() {
        assert_eq!(WebhookId::parse("not-a-uuid"), None);
    }
}
