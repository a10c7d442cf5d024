//! Example: Building an MDF architecture from the semantic model
//!
//! Builds the XDSM of a multidisciplinary feasible (MDF) optimization of
//! the Sellar problem without a description file and prints the TikZ
//! picture.

use xdsm::{
    XdsmBuilder,
    label::Label,
    semantic::{Component, Diagram, Side},
    style::Style,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut diagram = Diagram::new();

    diagram
        .add_component("opt", Style::Optimization, r"0, 7$\to$1: Optimizer")?
        .add_component("solver", Style::MDA, r"1, 5$\to$2: Newton")?
        .add_component_with(
            Component::new("D1".into(), Style::Function, "2: Discipline 1").with_stacked(true),
        )?
        .add_component("D2", Style::Function, "3: Discipline 2")?
        .add_component("F", Style::Function, Label::lines(["6: Objective", "$f$"]))?;

    diagram
        .connect("opt", "D1", Label::from("x, z").math())?
        .connect("opt", "D2", Label::from("z").math())?
        .connect("solver", "D1", Label::from("y_2").math())?
        .connect("D1", "D2", Label::from("y_1").math())?
        .connect("D2", "solver", Label::from("y_2").math())?
        .connect("D1", "F", Label::from("y_1").math())?
        .connect("F", "opt", Label::from("f").math())?;

    diagram
        .add_input("opt", Label::from("x^{(0)}").math())
        .add_output("opt", Label::from("x^*").math(), Side::Left)
        .add_output("F", Label::from("f^*").math(), Side::Right)
        .add_process(["opt", "solver", "D1", "D2", "solver", "F", "opt"], true);

    let builder = XdsmBuilder::default();
    let picture = builder.render_tikz(&diagram)?;

    println!("{picture}");
    Ok(())
}
