/// Removes the value at `source_idx` and reinserts it at `target_idx`, with
/// `target_idx` counted against the vec *before* the removal. The relative
/// order of all other values is preserved. Does nothing if the indices are
/// equal or outside the vec bounds.
pub fn shift_vec<T>(source_idx: usize, mut target_idx: usize, vec: &mut Vec<T>) {
    if source_idx == target_idx || source_idx >= vec.len() || target_idx > vec.len() {
        return;
    }

    if source_idx < target_idx {
        target_idx -= 1
    };

    let item = vec.remove(source_idx);
    vec.insert(target_idx, item);
}

/// Caps runs of consecutive identical characters at `max_run`.
///
/// A `max_run` of zero empties the string.
///
/// ```
/// assert_eq!(egui_sortable::utils::trim_symbols("xxxabbbc", 2), "xxabbc");
/// ```
pub fn trim_symbols(input: &str, max_run: usize) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run_char = None;
    let mut run_len = 0;
    for c in input.chars() {
        if run_char == Some(c) {
            run_len += 1;
        } else {
            run_char = Some(c);
            run_len = 1;
        }
        if run_len <= max_run {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_forward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        shift_vec(0, 3, &mut v);
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn shift_to_the_very_end() {
        let mut v = vec!['a', 'b', 'c'];
        shift_vec(0, 3, &mut v);
        assert_eq!(v, vec!['b', 'c', 'a']);
    }

    #[test]
    fn shift_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        shift_vec(2, 0, &mut v);
        assert_eq!(v, vec!['c', 'a', 'b', 'd']);
    }

    #[test]
    fn equal_indices_do_nothing() {
        let mut v = vec![1, 2, 3];
        shift_vec(1, 1, &mut v);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_bounds_does_nothing() {
        let mut v = vec![1, 2, 3];
        shift_vec(3, 0, &mut v);
        shift_vec(0, 4, &mut v);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn shift_never_changes_the_length() {
        for source in 0..4 {
            for target in 0..=4 {
                let mut v = vec![0, 1, 2, 3];
                shift_vec(source, target, &mut v);
                assert_eq!(v.len(), 4, "shift_vec({source}, {target})");
            }
        }
    }

    #[test]
    fn trim_caps_runs() {
        assert_eq!(trim_symbols("xxx", 2), "xx");
        assert_eq!(trim_symbols("aabbbc", 2), "aabbc");
        assert_eq!(trim_symbols("abc", 2), "abc");
    }

    #[test]
    fn trim_with_zero_empties() {
        assert_eq!(trim_symbols("abc", 0), "");
    }

    #[test]
    fn trim_handles_separated_runs() {
        assert_eq!(trim_symbols("aaxaa", 1), "axa");
    }

    #[test]
    fn trim_empty_input() {
        assert_eq!(trim_symbols("", 3), "");
    }
}
