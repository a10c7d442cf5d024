//! Integration tests for the XdsmBuilder API

use xdsm::{
    XdsmBuilder, XdsmError,
    config::{AppConfig, ExportConfig, LayoutConfig, StyleConfig},
    label::Label,
    semantic::{Connection, Diagram, Side},
    style::Style,
};

const SELLAR: &str = r#"
    [[component]]
    name = "opt"
    style = "Optimization"
    label = "Optimizer"

    [[component]]
    name = "solver"
    style = "MDA"
    label = "Newton"

    [[component]]
    name = "D1"
    style = "Function"
    label = ["Discipline 1", "$y_1$"]

    [[component]]
    name = "D2"
    style = "Function"
    label = "Discipline 2"

    [[connection]]
    source = "opt"
    target = "D1"
    label = "$x, z$"

    [[connection]]
    source = "solver"
    target = "D1"
    label = "$y_2$"

    [[connection]]
    source = "D1"
    target = "D2"
    label = "$y_1$"

    [[connection]]
    source = "D2"
    target = "solver"
    label = "$y_2$"

    [[input]]
    component = "opt"
    label = "$x^{(0)}$"

    [[output]]
    component = "opt"
    label = "$x^*$"

    [[process]]
    members = ["opt", "solver", "D1", "D2", "solver", "opt"]
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = XdsmBuilder::default();
}

#[test]
fn test_parse_and_build_description() {
    let builder = XdsmBuilder::default();
    let diagram = builder.parse(SELLAR).expect("Failed to parse description");

    let fragments = builder.build(&diagram).expect("Failed to build diagram");

    assert!(
        fragments
            .nodes()
            .contains(r"\node [Function] (D1) {Discipline 1 \\ $y_1$};")
    );
    assert!(
        fragments
            .edges()
            .contains("(D2-solver.center) edge [DataLine] (solver.center)")
    );
    assert_eq!(fragments.process().matches(r"\chainin").count(), 6);
}

#[test]
fn test_parse_errors_keep_source() {
    let source = r#"
        [[component]]
        name = "a"
        style = "Function"
        label = "A"

        [[connection]]
        source = "a"
        target = "missing"
        label = "x"
    "#;

    let err = XdsmBuilder::default().parse(source).unwrap_err();

    match err {
        XdsmError::Parse { err, src } => {
            assert_eq!(src, source);
            assert!(err.to_string().contains("unknown component `missing`"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_fluent_diagram_renders_complete_picture() {
    let mut diagram = Diagram::new();
    diagram
        .add_component("A", Style::Function, "A")
        .unwrap()
        .add_component("B", Style::Function, "B")
        .unwrap()
        .connect("A", "B", "x")
        .unwrap()
        .add_input("A", "x0");

    let picture = XdsmBuilder::default().render_tikz(&diagram).unwrap();

    let matrix = concat!(
        "\\matrix[MatrixSetup]{\n",
        "%Row 0\n",
        "\\node [DataIO] (output_A) {x0};&\n",
        "&\n",
        "\\\\\n",
        "%Row 1\n",
        "\\node [Function] (A) {A};&\n",
        "\\node [DataInter] (A-B) {x};&\n",
        "\\\\\n",
        "%Row 2\n",
        "&\n",
        "\\node [Function] (B) {B};&\n",
        "\\\\\n",
        "};",
    );
    assert!(picture.contains(matrix), "unexpected picture:\n{picture}");
    assert!(picture.contains(concat!(
        "\\path\n",
        "% Horizontal edges\n",
        "(A.center) edge [DataLine] (A-B.center)\n",
        "% Vertical edges\n",
        "(A-B.center) edge [DataLine] (B.center)\n",
        "(A.center) edge [DataLine] (output_A.center);\n",
        "\\end{pgfonlayer}",
    )));
}

#[test]
fn test_build_is_idempotent() {
    let builder = XdsmBuilder::default();
    let diagram = builder.parse(SELLAR).unwrap();

    let first = builder.build(&diagram).unwrap();
    let second = builder.build(&diagram).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_process_member() {
    let mut diagram = Diagram::new();
    diagram
        .add_component("A", Style::Function, "A")
        .unwrap()
        .add_process(["A", "Z"], true);

    let err = XdsmBuilder::default().build(&diagram).unwrap_err();

    assert!(matches!(err, XdsmError::UnknownComponent { ref name, .. } if name == "Z"));
}

#[test]
fn test_cell_collision_follows_config() {
    let mut diagram = Diagram::new();
    diagram
        .add_component("A", Style::Function, "A")
        .unwrap()
        .add_component("B", Style::Function, "B")
        .unwrap()
        .connect("A", "B", "first")
        .unwrap()
        .connect_with(Connection::new("A".into(), "B".into(), "second"))
        .unwrap();

    let strict = XdsmBuilder::default().build(&diagram);
    assert!(matches!(strict, Err(XdsmError::CellCollision { .. })));

    let config = AppConfig::new(
        LayoutConfig::new(false, true),
        StyleConfig::default(),
        ExportConfig::default(),
    );
    let fragments = XdsmBuilder::new(config).build(&diagram).unwrap();
    assert!(fragments.nodes().contains("{second}"));
    assert!(!fragments.nodes().contains("{first}"));
    assert!(!fragments.nodes().contains("%Row"));
}

#[test]
fn test_export_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::new("../styles/xdsm"),
        ExportConfig::default(),
    );
    let builder = XdsmBuilder::new(config);
    let mut diagram = Diagram::new();
    diagram
        .add_component("opt", Style::Optimization, Label::from("x").math())
        .unwrap()
        .add_output("opt", "x*", Side::Right);

    let written = builder.export(&diagram, dir.path(), "single").unwrap();

    assert_eq!(
        written,
        [dir.path().join("single.tikz"), dir.path().join("single.tex")]
    );
    let picture = std::fs::read_to_string(&written[0]).unwrap();
    assert!(picture.contains(r"\input{../styles/xdsm}"));
    assert!(picture.contains(r"\node [Optimization] (opt) {$x$};"));
    assert!(picture.contains(r"(opt.center) edge [DataLine] (right_output_opt.center)"));
}

#[test]
fn test_export_rejects_path_in_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut diagram = Diagram::new();
    diagram.add_component("A", Style::Function, "A").unwrap();

    let err = XdsmBuilder::default()
        .export(&diagram, dir.path(), "nested/name")
        .unwrap_err();

    assert!(matches!(err, XdsmError::Export(_)));
}
