use xdsm_core::{
    identifier::Id,
    label::Label,
    semantic::Side,
    style::Style,
};
use xdsm_parser::{error::ErrorCode, parse};

#[test]
fn test_components_in_declaration_order() {
    let source = r#"
        [[component]]
        name = "opt"
        style = "Optimization"
        label = "Optimizer"

        [[component]]
        name = "meta"
        style = "Metamodel"
        label = ["Surrogate", "$\\hat{f}$"]
        faded = true

        [[component]]
        name = "custom"
        style = "MyStyle"
        label = "Custom"
    "#;

    let diagram = parse(source).expect("Failed to parse");

    let components = diagram.components();
    assert_eq!(components.len(), 3);
    assert_eq!(components[0].id(), Id::new("opt"));
    assert_eq!(components[0].style(), &Style::Optimization);
    assert_eq!(components[1].label(), &Label::lines(["Surrogate", r"$\hat{f}$"]));
    assert!(components[1].is_faded());
    assert_eq!(components[2].style(), &Style::Custom("MyStyle".to_string()));
}

#[test]
fn test_inputs_outputs_and_defaults() {
    let source = r#"
        [[component]]
        name = "a"
        style = "Function"
        label = "A"

        [[input]]
        component = "a"
        label = "x0"
        stacked = true

        [[output]]
        component = "a"
        label = "left"

        [[output]]
        component = "a"
        label = "right"
        side = "right"
        style = "Metamodel"
    "#;

    let diagram = parse(source).expect("Failed to parse");

    let input = diagram.inputs().next().unwrap();
    assert_eq!(input.node_id(), "output_a");
    assert_eq!(input.style(), &Style::DataIO);
    assert!(input.is_stacked());

    let left = diagram.outputs(Side::Left).next().unwrap();
    assert_eq!(left.label(), &Label::from("left"));
    let right = diagram.outputs(Side::Right).next().unwrap();
    assert_eq!(right.style(), &Style::Metamodel);
    assert_eq!(right.node_id(), "right_output_a");
}

#[test]
fn test_process_defaults_to_directed() {
    let source = r#"
        [[component]]
        name = "a"
        style = "Function"
        label = "A"

        [[component]]
        name = "b"
        style = "Function"
        label = "B"

        [[process]]
        members = ["a", "b", "a"]
    "#;

    let diagram = parse(source).expect("Failed to parse");

    let chain = &diagram.processes()[0];
    assert!(chain.is_directed());
    assert_eq!(chain.members().len(), 3);
}

#[test]
fn test_unknown_field_is_rejected() {
    let source = r#"
        [[component]]
        name = "a"
        style = "Function"
        label = "A"
        colour = "red"
    "#;

    let err = parse(source).unwrap_err();

    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    assert!(err.diagnostics()[0].message().contains("colour"));
}

#[test]
fn test_all_problems_reported_together() {
    let source = r#"
        [[component]]
        name = "a"
        style = "Function"
        label = { text = "A" }

        [[connection]]
        source = "a"
        target = "a"
        label = "loop"

        [[input]]
        component = "ghost"
        label = "g"
    "#;

    let err = parse(source).unwrap_err();

    let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::E101, ErrorCode::E200, ErrorCode::E301]);
    assert!(err.to_string().contains("(+2 more)"));
}
