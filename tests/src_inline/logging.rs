use super::*;

#[test]
fn test_default_directive_levels() {
    assert_eq!(default_directive(0), "ftc_statview=warn,warn");
    assert_eq!(default_directive(1), "ftc_statview=info,warn");
    assert_eq!(default_directive(2), "ftc_statview=debug,warn");
    assert_eq!(default_directive(7), "ftc_statview=trace,warn");
}

#[test]
fn test_init_twice_is_harmless() {
    init(0);
    init(2);
}
