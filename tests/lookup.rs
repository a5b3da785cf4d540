// ABOUTME: Integration tests for placeholder key resolution.
// ABOUTME: Covers plain lookups, switch statements, and strict/lenient policy.

use envlookup::lookup::*;
use proptest::prelude::*;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod plain {
    use super::*;

    #[test]
    fn defined_variable_resolves_in_both_modes() {
        let source = env(&[("APP_PORT", "8080")]);

        let strict = Resolver::with_source(true, &source);
        let lenient = Resolver::with_source(false, &source);

        assert_eq!(strict.lookup("APP_PORT").unwrap().as_deref(), Some("8080"));
        assert_eq!(lenient.lookup("APP_PORT").unwrap().as_deref(), Some("8080"));
    }

    #[test]
    fn empty_value_is_defined() {
        let resolver = Resolver::with_source(true, env(&[("EMPTY", "")]));
        assert_eq!(resolver.lookup("EMPTY").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn undefined_variable_is_none_when_lenient() {
        let resolver = Resolver::with_source(false, env(&[]));
        assert_eq!(resolver.lookup("MISSING").unwrap(), None);
    }

    #[test]
    fn undefined_variable_fails_when_strict() {
        let resolver = Resolver::with_source(true, env(&[]));
        let err = resolver.lookup("MISSING").unwrap_err();

        assert_eq!(
            err,
            UndefinedVariable::Missing {
                name: "MISSING".to_string(),
                expression: "MISSING".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "the environment variable 'MISSING' is not defined; could not substitute the expression '${MISSING}'"
        );
    }

    #[test]
    fn default_resolver_is_strict() {
        assert!(Resolver::new().is_strict());
        assert!(Resolver::default().is_strict());
        assert!(!Resolver::lenient().is_strict());
    }
}

mod switch {
    use super::*;

    #[test]
    fn first_matching_case_wins() {
        let resolver = Resolver::with_source(true, env(&[("ENV", "prod")]));
        let value = resolver.lookup("ENV prod=P staging=S prod=Q").unwrap();
        assert_eq!(value.as_deref(), Some("P"));
    }

    #[test]
    fn later_case_matches_when_earlier_ones_do_not() {
        let resolver = Resolver::with_source(true, env(&[("ENV", "staging")]));
        let value = resolver.lookup("ENV prod=P staging=S").unwrap();
        assert_eq!(value.as_deref(), Some("S"));
    }

    #[test]
    fn no_matching_case_is_none() {
        let resolver = Resolver::with_source(true, env(&[("ENV", "dev")]));
        assert_eq!(resolver.lookup("ENV prod=P staging=S").unwrap(), None);
    }

    #[test]
    fn replacement_keeps_later_equals_signs() {
        let resolver = Resolver::with_source(true, env(&[("ENV", "prod")]));
        let value = resolver.lookup("ENV prod=a=b").unwrap();
        assert_eq!(value.as_deref(), Some("a=b"));
    }

    #[test]
    fn cases_may_be_separated_by_any_whitespace() {
        let resolver = Resolver::with_source(true, env(&[("ENV", "staging")]));
        let value = resolver.lookup("ENV\tprod=P \n  staging=S").unwrap();
        assert_eq!(value.as_deref(), Some("S"));
    }

    #[test]
    fn missing_case_body_is_malformed() {
        let resolver = Resolver::with_source(false, env(&[("ENV", "prod")]));
        let err = resolver.lookup("ENV=").unwrap_err();

        assert!(matches!(err, UndefinedVariable::MalformedSwitch { .. }));
        assert_eq!(err.expression(), "ENV=");
        assert!(err.to_string().contains("may not contain '='"));
        assert!(err.to_string().contains("'${ENV=}'"));
    }

    #[test]
    fn undefined_driving_variable_fails_when_strict() {
        let resolver = Resolver::with_source(true, env(&[]));
        let err = resolver.lookup("ENV prod=P").unwrap_err();

        assert_eq!(err.name(), "ENV");
        assert_eq!(err.expression(), "ENV prod=P");
        assert!(err.to_string().contains("'${ENV prod=P}'"));
    }

    #[test]
    fn undefined_driving_variable_is_none_when_lenient() {
        let resolver = Resolver::with_source(false, env(&[]));
        assert_eq!(resolver.lookup("ENV prod=P").unwrap(), None);
    }

    #[test]
    fn undefined_driving_variable_never_matches_empty_case() {
        let resolver = Resolver::with_source(false, env(&[]));
        assert_eq!(resolver.lookup("ENV =blank").unwrap(), None);
    }
}

mod sources {
    use super::*;

    #[test]
    fn process_env_reads_variables() {
        temp_env::with_var("ENVLOOKUP_TEST_VAR", Some("from_environment"), || {
            let resolver = Resolver::strict();
            assert_eq!(
                resolver.lookup("ENVLOOKUP_TEST_VAR").unwrap().as_deref(),
                Some("from_environment")
            );
        });
    }

    #[test]
    fn process_env_drives_switch() {
        temp_env::with_var("ENVLOOKUP_DEPLOY_ENV", Some("staging"), || {
            let resolver = Resolver::strict();
            let value = resolver
                .lookup("ENVLOOKUP_DEPLOY_ENV production=db.prod staging=db.stage")
                .unwrap();
            assert_eq!(value.as_deref(), Some("db.stage"));
        });
    }

    #[test]
    fn process_env_missing_variable() {
        temp_env::with_var_unset("ENVLOOKUP_UNSET_VAR", || {
            assert!(Resolver::strict().lookup("ENVLOOKUP_UNSET_VAR").is_err());
            assert_eq!(Resolver::lenient().lookup("ENVLOOKUP_UNSET_VAR").unwrap(), None);
        });
    }

    #[test]
    fn layered_prefers_front_source() {
        let front = env(&[("SHARED", "front")]);
        let back = env(&[("SHARED", "back"), ("BACK_ONLY", "value")]);
        let resolver = Resolver::with_source(true, Layered::new(front, back));

        assert_eq!(resolver.lookup("SHARED").unwrap().as_deref(), Some("front"));
        assert_eq!(resolver.lookup("BACK_ONLY").unwrap().as_deref(), Some("value"));
        assert!(resolver.lookup("NEITHER").is_err());
    }

    #[test]
    fn resolver_is_shareable_across_threads() {
        let resolver = Resolver::with_source(true, env(&[("ENV", "prod")]));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| resolver.lookup("ENV prod=P").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().as_deref(), Some("P"));
            }
        });
    }
}

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn undefined_plain_key_is_none_when_lenient(key in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
            let resolver = Resolver::with_source(false, env(&[]));
            prop_assert_eq!(resolver.lookup(&key).unwrap(), None);
        }

        #[test]
        fn undefined_plain_key_fails_when_strict(key in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
            let resolver = Resolver::with_source(true, env(&[]));
            let err = resolver.lookup(&key).unwrap_err();
            prop_assert_eq!(err.name(), key.as_str());
        }

        #[test]
        fn defined_plain_key_resolves_in_any_mode(
            key in "[A-Za-z_][A-Za-z0-9_]{0,20}",
            value in "[^=]{0,30}",
            strict in any::<bool>(),
        ) {
            let resolver = Resolver::with_source(strict, env(&[(key.as_str(), value.as_str())]));
            prop_assert_eq!(resolver.lookup(&key).unwrap(), Some(value));
        }
    }
}
