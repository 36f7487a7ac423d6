mod assert;
use assert::s;

#[test]
fn test_string_ordering() {
    assert::all_true(&[
        (s("a"), "<", s("b")),
        (s("b"), ">", s("a")),
        (s("a"), "<", s("aa")),
        (s("aa"), ">", s("a")),
        (s(""), "<", s("a")),
        (s("abc"), "<=", s("abc")),
        (s("abc"), ">=", s("abc")),
        (s("abd"), ">", s("abc")),
        (s("B"), "<", s("a")),
    ]);
    assert::all_false(&[
        (s("a"), "<", s("a")),
        (s("a"), ">", s("a")),
        (s("b"), "<", s("a")),
        (s("aa"), "<=", s("a")),
        (s("a"), ">=", s("aa")),
    ]);
}

#[test]
fn test_string_ordering_by_code_point() {
    assert::all_true(&[
        (s("z"), "<", s("é")),
        (s("é"), "<", s("€")),
        (s("€"), "<", s("😀")),
        (s("10"), "<", s("9")),
    ]);
}

#[test]
fn test_string_antisymmetric_and_transitive() {
    let words = ["", "a", "aa", "ab", "b", "ba", "Z", "~"];
    for x in words {
        for y in words {
            if x == y {
                continue;
            }
            let lt = ordering_core::compare(&s(x), &s(y), ordering_core::Operator::Lt)
                .expect("strings always order");
            let gt = ordering_core::compare(&s(x), &s(y), ordering_core::Operator::Gt)
                .expect("strings always order");
            assert!(lt != gt, "{x:?} vs {y:?}");
            for z in words {
                if x < z && z < y {
                    assert::all_true(&[(s(x), "<", s(z)), (s(z), "<", s(y)), (s(x), "<", s(y))]);
                }
            }
        }
    }
}
