/// Join conditional class fragments into a single `class` attribute value.
///
/// Fragments whose condition is `false` are skipped, the rest keep their
/// input order. The caller's `class_override` is appended last so utility
/// classes supplied at the call site win over the component defaults.
/// Empty fragments and an empty override are ignored.
pub fn resolve_classes<'a>(
    fragments: impl IntoIterator<Item = (bool, &'a str)>,
    class_override: Option<&'a str>,
) -> String {
    let mut out = String::new();
    let selected = fragments
        .into_iter()
        .filter_map(|(enabled, fragment)| enabled.then_some(fragment))
        .chain(class_override);

    for fragment in selected {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_only_enabled_fragments_in_order() {
        let classes = resolve_classes(
            [(true, "a"), (false, "b"), (true, "c"), (false, "d")],
            None,
        );
        assert_eq!(classes, "a c");
    }

    #[test]
    fn override_is_appended_last() {
        let classes = resolve_classes([(true, "rounded-md"), (true, "p-4")], Some("mt-2"));
        assert_eq!(classes, "rounded-md p-4 mt-2");
    }

    #[test]
    fn all_disabled_yields_only_override() {
        let classes = resolve_classes([(false, "a"), (false, "b")], Some("x"));
        assert_eq!(classes, "x");
    }

    #[test]
    fn empty_inputs_yield_empty_string() {
        assert_eq!(resolve_classes(Vec::<(bool, &str)>::new(), None), "");
        assert_eq!(resolve_classes([(true, ""), (true, "  ")], Some("")), "");
    }

    #[test]
    fn multi_class_fragments_are_kept_whole() {
        let classes = resolve_classes(
            [
                (true, "inline-flex items-center"),
                (false, "bg-red-600 text-white"),
                (true, "h-8 px-3 text-sm"),
            ],
            None,
        );
        assert_eq!(classes, "inline-flex items-center h-8 px-3 text-sm");
    }

    #[test]
    fn fragment_present_iff_condition_true() {
        let names = ["f0", "f1", "f2", "f3"];
        for mask in 0u8..16 {
            let entries: Vec<(bool, &str)> = names
                .iter()
                .enumerate()
                .map(|(i, n)| (mask & (1 << i) != 0, *n))
                .collect();
            let classes = resolve_classes(entries.clone(), Some("tail"));
            let tokens: Vec<&str> = classes.split(' ').collect();
            let expected: Vec<&str> = entries
                .iter()
                .filter(|(on, _)| *on)
                .map(|(_, n)| *n)
                .chain(["tail"])
                .collect();
            assert_eq!(tokens, expected, "mask {mask:04b}");
        }
    }
}
