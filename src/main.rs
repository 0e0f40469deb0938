//! Builds the "azure-devops" sample course, rearranges it and logs every step.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use course_catalog::domain::{Course, Lecture, Material, Module};
use course_catalog::framework::{Container, NamedEntity};
use course_catalog::lifecycle::setup_tracing;
use tracing::{info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Building sample course");

    let mut course = Course::new(
        "azure-devops",
        "Continuous Delivery and DevOps with Azure DevOps: Source Control with Git",
    );

    let mut branching = Lecture::new("Branching", "https://youtube.com/1234");
    branching
        .add(Material::document("Branching pdf", "https://storage/branching.pdf"))
        .map_err(|e| e.to_string())?;
    branching
        .add(Material::link("Branching link", "https://page.com/branching.html"))
        .map_err(|e| e.to_string())?;

    let mut fundamentals = Module::new("Fundamentals");
    fundamentals.add(branching.clone()).map_err(|e| e.to_string())?;

    let mut overview = Module::new("Course Overview");
    overview
        .add(Lecture::new("Course Overview", "https://youtube.com/3456"))
        .map_err(|e| e.to_string())?;

    let mut git = Module::new("Source Control with Git on Azure DevOps");
    git.add(Lecture::new("Introduction", "https://youtube.com/6789"))
        .map_err(|e| e.to_string())?;
    git.add(Lecture::new("Lecture 2", "https://youtube.com/8901"))
        .map_err(|e| e.to_string())?;

    for module in [fundamentals.clone(), overview.clone(), git.clone()] {
        course.add(module).map_err(|e| e.to_string())?;
    }

    // Duplicate names are rejected and reported, not fatal.
    if let Err(e) = course.add(Module::new("Fundamentals")) {
        warn!(error = %e, "Duplicate module rejected");
    }

    course.move_to(&overview, 1).map_err(|e| e.to_string())?;
    info!(modules = ?course.children().names(), "Modules reordered");

    course
        .move_lecture(&branching, &fundamentals, &git, 2)
        .map_err(|e| e.to_string())?;

    for module in course.children() {
        info!(
            module = module.name(),
            lectures = ?module.children().names(),
            "Module contents"
        );
    }

    info!(modules = course.number_of_modules(), "Done");
    Ok(())
}
