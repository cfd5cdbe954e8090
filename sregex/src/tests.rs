use crate::nfa::{Label, Nfa};
use crate::parser::{self, ParseError};
use crate::Regex;
use ::regex::Regex as LibRegex;
use proptest::prelude::*;

fn nfa(pattern: &str) -> Nfa {
    Nfa::from_ast(&parser::regex(pattern).unwrap())
}

#[test]
fn thompson_state_counts() {
    assert_eq!(nfa("a").states().len(), 2);
    assert_eq!(nfa("ab").states().len(), 4);
    assert_eq!(nfa("a*").states().len(), 4);
    assert_eq!(nfa("a|b").states().len(), 6);
}

#[test]
fn literal_fragment_shape() {
    let nfa = nfa("a");
    let start = &nfa.states()[nfa.start_index()];
    assert!(!start.is_accepting());
    assert_eq!(start.edges().len(), 1);
    let edge = start.edges()[0];
    assert_eq!(edge.label(), Label::Byte(b'a'));
    assert_eq!(edge.to(), nfa.end_index());
}

#[test]
fn epsilon_closure_reaches_through_epsilon_edges() {
    let nfa = nfa("a*");
    // Without consuming input, the start of a* already reaches the accepting end
    let closure = nfa.closure(nfa.start_index()).unwrap();
    assert!(closure.contains(&nfa.start_index()));
    assert!(closure.contains(&nfa.end_index()));
    assert!(nfa.closure(nfa.states().len()).is_none());
}

#[test]
fn thompson_single_accepting_node() {
    for pattern in ["a", "ab", "a*", "a|b", "(a|b)*ab(b|cc)kkws*", "[a-z]+"] {
        let nfa = nfa(pattern);
        let accepting: Vec<usize> = nfa
            .states()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_accepting())
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(accepting, vec![nfa.end_index()], "pattern {pattern}");
    }
}

#[test]
fn quantifier_zoo() {
    let regex = Regex::compile("a*b+c?d").unwrap();

    for accepted in [
        "abd", "bcd", "bd", "bbbbbbcd", "abbd", "aaaabbbd", "abbbcd", "abbbd", "abcd",
    ] {
        assert!(regex.accepts(accepted), "should accept {accepted}");
    }
    for rejected in ["ad", "ac", "ab", "acd"] {
        assert!(!regex.accepts(rejected), "should reject {rejected}");
    }
}

#[test]
fn alternation_with_repetition() {
    let regex = Regex::compile("(a|b)*ab(b|cc)kkws*").unwrap();

    assert!(regex.accepts("abcckkws"));
    assert!(regex.accepts("abababbkkws"));
    assert!(regex.accepts("abcckkw"));
    assert!(regex.accepts("aaaaabbbbbbbabbkkwsssssss"));

    assert!(!regex.accepts("abkkw"));
    assert!(!regex.accepts("abkkwss"));
    assert!(!regex.accepts("abckkw"));
    assert!(!regex.accepts("abckkwss"));
}

#[test]
fn kleene_chain() {
    let regex = Regex::compile("a*b*c*").unwrap();

    for accepted in [
        "", "a", "b", "c", "ab", "ac", "bc", "abc", "abcc", "aaaccc", "aaabbccc",
    ] {
        assert!(regex.accepts(accepted), "should accept {accepted:?}");
    }
    for rejected in ["d", "ad", "bd", "cd", "abd", "cba", "acb"] {
        assert!(!regex.accepts(rejected), "should reject {rejected}");
    }
}

#[test]
fn alternated_group_repetition() {
    let regex = Regex::compile("hello( world| there| you)*").unwrap();

    assert!(regex.accepts("hello world"));
    assert!(regex.accepts("hello there"));
    assert!(regex.accepts("hello you"));
    assert!(regex.accepts("hello"));
    assert!(regex.accepts("hello world there world you you"));

    assert!(!regex.accepts("hello world  there"));
    assert!(!regex.accepts("hello "));
    assert!(!regex.accepts("he hello world you"));

    let regex = Regex::compile("hello( world| there| you)?").unwrap();
    assert!(regex.accepts("hello world"));
    assert!(regex.accepts("hello"));
    assert!(!regex.accepts("hello world there"));
}

#[test]
fn escaped_specials() {
    let regex = Regex::compile(r#"they're \(\"them\"\)\."#).unwrap();
    assert!(regex.accepts(r#"they're ("them")."#));
    assert!(!regex.accepts("they're (them)"));

    // Escaping a non-special is harmless and denotes the byte itself
    let regex = Regex::compile(r"\a\*").unwrap();
    assert!(regex.accepts("a*"));
    assert!(!regex.accepts("a"));
}

#[test]
fn dot_skips_line_terminators() {
    let regex = Regex::compile("a.b").unwrap();
    assert!(regex.accepts("axb"));
    assert!(regex.accepts("a b"));
    assert!(regex.accepts("a\tb"));
    assert!(!regex.accepts("a\nb"));
    assert!(!regex.accepts("a\rb"));
    assert!(!regex.accepts("ab"));

    let regex = Regex::compile(r"(hey )?do you like foo.*\?").unwrap();
    assert!(regex.accepts("do you like food?"));
    assert!(regex.accepts("hey do you like food and eating out?"));
    assert!(!regex.accepts("do you like foo"));
}

#[test]
fn bracket_ranges() {
    let regex = Regex::compile(r"[a-z]+( [a-z]+)*\.?").unwrap();
    assert!(regex.accepts("hello world"));
    assert!(regex.accepts("i am writing a sentence."));
    assert!(!regex.accepts("I am writing a sentence."));
    assert!(!regex.accepts("HELLO"));
}

#[test]
fn bracket_corner_cases() {
    // '^' is only a negation marker in first position
    let regex = Regex::compile("[a^]").unwrap();
    assert!(regex.accepts("a"));
    assert!(regex.accepts("^"));
    assert!(!regex.accepts("b"));

    // '-' is a plain member at the first or last position
    for pattern in ["[a-]", "[-a]"] {
        let regex = Regex::compile(pattern).unwrap();
        assert!(regex.accepts("a"), "pattern {pattern}");
        assert!(regex.accepts("-"), "pattern {pattern}");
        assert!(!regex.accepts("b"), "pattern {pattern}");
    }

    // A backwards range is dropped, leaving the surrounding members intact
    let regex = Regex::compile("[xz-ay]").unwrap();
    assert!(regex.accepts("x"));
    assert!(regex.accepts("y"));
    assert!(!regex.accepts("z"));
    assert!(!regex.accepts("b"));

    // An empty class matches nothing at all
    let regex = Regex::compile("[]").unwrap();
    assert!(!regex.accepts(""));
    assert!(!regex.accepts("a"));

    // A negated empty class matches every single valid byte
    let regex = Regex::compile("[^]").unwrap();
    assert!(regex.accepts("a"));
    assert!(regex.accepts("\n"));
    assert!(!regex.accepts(""));
    assert!(!regex.accepts("ab"));
}

#[test]
fn negated_bracket_class() {
    let regex = Regex::compile("[^ab]").unwrap();
    assert!(regex.accepts("c"));
    assert!(regex.accepts("\t"));
    assert!(!regex.accepts("a"));
    assert!(!regex.accepts("b"));
    // Invalid bytes are not part of the complement
    assert!(!regex.accepts("\u{1}"));

    let regex = Regex::compile(r"[^\d]+").unwrap();
    assert!(regex.accepts("abc"));
    assert!(!regex.accepts("a1c"));
}

#[test]
fn substring_search() {
    let regex = Regex::compile("foo+").unwrap();

    for hit in ["table football", "food", "ur a foodie", "the town fool"] {
        assert!(regex.test(hit), "should find a match in {hit}");
    }
    for miss in ["fo", "forage", "look over there", ""] {
        assert!(!regex.test(miss), "should not find a match in {miss:?}");
    }
}

#[test]
fn accepting_implies_substring_match() {
    let regex = Regex::compile("a*b").unwrap();
    for input in ["b", "ab", "aaab"] {
        assert!(regex.accepts(input));
        assert!(regex.test(input));
    }
    // A pattern accepting the empty string matches a substring of anything
    let regex = Regex::compile("a*").unwrap();
    assert!(regex.accepts(""));
    assert!(regex.test(""));
    assert!(regex.test("zzz"));
}

#[test]
fn control_character_escapes() {
    let regex = Regex::compile(r"hello\n?\tworld").unwrap();
    assert!(regex.accepts("hello\n\tworld"));
    assert!(regex.accepts("hello\tworld"));
    assert!(!regex.accepts("hello world"));
    assert!(!regex.accepts("hello\nworld"));
}

#[test]
fn class_complements_partition_valid_bytes() {
    let pairs = [(r"\d", r"\D"), (r"\w", r"\W"), (r"\s", r"\S")];
    for (positive, negative) in pairs {
        let positive = Regex::compile(positive).unwrap();
        let negative = Regex::compile(negative).unwrap();
        for byte in crate::chars::valid_bytes() {
            let input = (byte as char).to_string();
            assert_ne!(
                positive.accepts(&input),
                negative.accepts(&input),
                "byte {byte:#04x} should match exactly one of {positive}/{negative}",
            );
        }
        // Invalid bytes are rejected by both sides
        assert!(!positive.accepts("\u{1}"));
        assert!(!negative.accepts("\u{1}"));
    }
}

#[test]
fn character_class_membership() {
    let word = Regex::compile(r"\w+").unwrap();
    assert!(word.accepts("abc_123"));
    assert!(!word.accepts("abc-123"));

    let space = Regex::compile(r"a\sb").unwrap();
    assert!(space.accepts("a b"));
    assert!(space.accepts("a\nb"));
    assert!(space.accepts("a\u{b}b"));
    assert!(!space.accepts("ab"));

    let digits = Regex::compile(r"\d\d").unwrap();
    assert!(digits.accepts("42"));
    assert!(!digits.accepts("4a"));
}

#[test]
fn dfa_alphabet_is_the_nfa_language() {
    let regex = Regex::compile("ab").unwrap();
    assert_eq!(regex.dfa().alphabet(), b"ab");
    // Bytes outside the alphabet reject without a transition ever existing for them
    assert!(!regex.accepts("ac"));
    assert!(!regex.accepts("zab"));

    for state in regex.dfa().states() {
        assert_eq!(state.transitions().len(), regex.dfa().alphabet().len());
    }
}

#[test]
fn dfa_state_names_are_canonical() {
    let regex = Regex::compile("(a|b)*ab").unwrap();
    let dfa = regex.dfa();

    let mut seen = std::collections::HashSet::new();
    for state in dfa.states() {
        // Names are sorted id sets, and no two states share one
        let ids: Vec<usize> = state
            .name()
            .split('/')
            .map(|id| id.parse().unwrap())
            .collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(seen.insert(state.name().to_string()));
    }
}

#[test]
fn compilation_is_pure() {
    let first = Regex::compile("(a|b)*abb").unwrap();
    let second = Regex::compile("(a|b)*abb").unwrap();
    assert_eq!(first.dfa(), second.dfa());
    for input in ["abb", "babb", "ab", ""] {
        assert_eq!(first.accepts(input), second.accepts(input));
        assert_eq!(first.accepts(input), first.accepts(input));
    }
}

#[test]
fn top_level_compile() {
    assert!(crate::compile("a|b").unwrap().accepts("b"));
    assert!(crate::compile("(").is_err());
}

#[test]
fn evaluator_steps() {
    let regex = Regex::compile("ab*").unwrap();
    let mut eval = regex.dfa().evaluator();
    assert!(!eval.is_accepting());
    assert!(eval.step(b'a').is_some());
    assert!(eval.is_accepting());
    assert!(eval.step(b'b').is_some());
    assert!(eval.is_accepting());
    // A byte outside the alphabet rejects, and rejection is sticky
    assert!(eval.step(b'z').is_none());
    assert!(!eval.is_accepting());
    assert!(eval.current_state().is_none());
    assert!(eval.step(b'a').is_none());
}

#[test]
fn transition_tables_render() {
    let regex = Regex::compile("ab").unwrap();
    let dfa = regex.dfa();
    assert_eq!(dfa.initial_state_index(), 0);
    assert!(!dfa.initial_state().is_accepting());

    let table = dfa.to_table();
    assert!(table.contains('→'));
    assert_eq!(table.lines().count(), 1 + dfa.states().len());
    assert!(dfa.ascii_table().contains("->"));

    let nfa = nfa("ab");
    let table = nfa.ascii_table();
    assert!(table.contains("eps"));
    assert_eq!(table.lines().count(), 1 + nfa.states().len());
    assert!(nfa.to_table().contains('ε'));
}

#[test]
fn pattern_is_kept() {
    let regex = Regex::compile("a|b").unwrap();
    assert_eq!(regex.pattern(), "a|b");
    assert_eq!(regex.to_string(), "a|b");
}

#[test]
fn parse_error_classification() {
    assert_eq!(parser::regex("").unwrap_err(), ParseError::UnexpectedToken(0));
    assert_eq!(parser::regex("*a").unwrap_err(), ParseError::UnexpectedToken(0));
    assert_eq!(parser::regex("(ab").unwrap_err(), ParseError::UnexpectedToken(0));
    assert_eq!(parser::regex("()").unwrap_err(), ParseError::UnexpectedToken(0));
    assert_eq!(parser::regex("a)b").unwrap_err(), ParseError::TrailingInput(1));
    assert_eq!(parser::regex("a**").unwrap_err(), ParseError::TrailingInput(2));
    assert_eq!(parser::regex("ab\\").unwrap_err(), ParseError::InvalidEscape(2));
    assert_eq!(parser::regex("\\").unwrap_err(), ParseError::InvalidEscape(0));
    assert_eq!(parser::regex("[ab").unwrap_err(), ParseError::InvalidRange(0));
    assert_eq!(parser::regex("a[b").unwrap_err(), ParseError::InvalidRange(1));
}

#[test]
fn pattern_rendering_reparses() {
    for pattern in [
        "a*b+c?d",
        "(a|b)*ab(b|cc)kkws*",
        r#"they're \(\"them\"\)\."#,
        r"[a-z]+( [a-z]+)*\.?",
        r"hello\n?\tworld",
        r"[^a-c\d]*",
    ] {
        let ast = parser::regex(pattern).unwrap();
        let rendered = ast.to_pattern();
        let reparsed = parser::regex(&rendered).unwrap();
        assert_eq!(ast, reparsed, "pattern {pattern} rendered as {rendered}");
    }
}

proptest! {
    /// The pipeline agrees with the `regex` crate on every pattern of the shared dialect
    #[test]
    fn matches_library_regex(
        pattern in random_pattern(),
        inputs in prop::collection::vec("[a-e]{0,12}", 24)
    ) {
        let regex = Regex::compile(&pattern).unwrap();
        let lib_regex = LibRegex::new(&format!("^(?:{pattern})$")).unwrap();

        for input in inputs.iter() {
            prop_assert_eq!(regex.accepts(input), lib_regex.is_match(input));
        }
    }

    /// Whatever the whole input matches, substring search finds as well
    #[test]
    fn accepts_implies_test(
        pattern in random_pattern(),
        inputs in prop::collection::vec("[a-e]{0,12}", 24)
    ) {
        let regex = Regex::compile(&pattern).unwrap();
        for input in inputs.iter() {
            if regex.accepts(input) {
                prop_assert!(regex.test(input));
            }
        }
    }

    /// Compiling the same pattern twice produces the very same automaton
    #[test]
    fn recompilation_is_deterministic(pattern in random_pattern()) {
        let first = Regex::compile(&pattern).unwrap();
        let second = Regex::compile(&pattern).unwrap();
        prop_assert_eq!(first.dfa(), second.dfa());
    }

    /// A rendered syntax tree parses back to an equal tree
    #[test]
    fn rendered_pattern_reparses(pattern in random_pattern()) {
        let ast = parser::regex(&pattern).unwrap();
        let reparsed = parser::regex(&ast.to_pattern()).unwrap();
        prop_assert_eq!(ast, reparsed);
    }
}

fn random_pattern() -> impl Strategy<Value = String> {
    "[a-e]".prop_recursive(6, 64, 8, |inner| {
        prop_oneof![
            10 => prop::collection::vec(inner.clone(), 1..6)
                .prop_map(|vec| format!("({})", vec.join(""))),
            10 => prop::collection::vec(inner.clone(), 1..6).prop_map(|vec| vec.join("|")),
            3 => inner.clone().prop_map(|r| format!("({r})*")),
            3 => inner.clone().prop_map(|r| format!("({r})+")),
            3 => inner.prop_map(|r| format!("({r})?")),
        ]
    })
}
