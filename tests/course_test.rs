use course_catalog::domain::{Course, Lecture, Module};
use course_catalog::framework::{CollectionError, Container, NamedEntity};

const DESCRIPTION: &str = "Continuous Delivery and DevOps with Azure DevOps: Source Control with Git";

fn module_with(name: &str, lectures: &[(&str, &str)]) -> Module {
    let mut module = Module::new(name);
    for (lecture, url) in lectures {
        module.add(Lecture::new(*lecture, *url)).unwrap();
    }
    module
}

/// The three modules used by most scenarios, in insertion order.
fn sample_modules() -> (Module, Module, Module) {
    (
        module_with("Fundamentals", &[("Branching", "https://youtube.com/1234")]),
        module_with("Course Overview", &[("Course Overview", "https://youtube.com/3456")]),
        module_with(
            "Source Control with Git on Azure DevOps",
            &[("Introduction", "https://youtube.com/6789")],
        ),
    )
}

fn sample_course() -> (Course, Module, Module, Module) {
    let (fundamentals, overview, git) = sample_modules();
    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(fundamentals.clone()).unwrap();
    course.add(overview.clone()).unwrap();
    course.add(git.clone()).unwrap();
    (course, fundamentals, overview, git)
}

#[test]
fn test_add_module() {
    let mut course = Course::new("azure-devops", DESCRIPTION);
    let module = module_with("Fundamentals", &[("Branching", "https://youtube.com/1234")]);
    course.add(module.clone()).unwrap();
    assert!(course.includes(&module));
    assert_eq!(course.module("Fundamentals").map(|m| m.number_of_lectures()), Some(1));
}

#[test]
fn test_add_module_with_same_name_is_rejected() {
    let mut course = Course::new("azure-devops", DESCRIPTION);
    let first = module_with("Fundamentals", &[("Branching", "https://youtube.com/1234")]);
    let second = Module::new("Fundamentals");

    course.add(first.clone()).unwrap();
    let err = course.add(second).unwrap_err();

    assert!(course.includes(&first));
    assert_eq!(course.number_of_modules(), 1);
    assert_eq!(err.to_string(), "Element already exists.");
    // The stored module is the first one, lectures included.
    assert_eq!(course.module("Fundamentals").map(|m| m.number_of_lectures()), Some(1));
}

#[test]
fn test_rearrange_modules() {
    let (mut course, fundamentals, overview, git) = sample_course();

    course.move_to(&overview, 1).unwrap();

    assert_eq!(course.position(&overview), Ok(1));
    assert_eq!(course.position(&fundamentals), Ok(2));
    assert_eq!(course.position(&git), Ok(3));
}

#[test]
fn test_rearrange_unexisting_module() {
    let (fundamentals, overview, git) = sample_modules();
    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(fundamentals).unwrap();
    course.add(overview).unwrap();

    let err = course.move_to(&git, 2).unwrap_err();
    assert!(err.is_unexisting_element());
}

#[test]
fn test_rearrange_beyond_last_position() {
    let (mut course, fundamentals, overview, git) = sample_course();

    let err = course.move_to(&fundamentals, 10).unwrap_err();
    assert!(err.is_invalid_position());

    assert_eq!(course.position(&fundamentals), Ok(1));
    assert_eq!(course.position(&overview), Ok(2));
    assert_eq!(course.position(&git), Ok(3));
}

#[test]
fn test_rearrange_to_zero_or_negative_position() {
    let (mut course, fundamentals, overview, git) = sample_course();

    for position in [0, -1] {
        let err = course.move_to(&fundamentals, position).unwrap_err();
        assert!(err.is_invalid_position());
    }

    assert_eq!(course.position(&fundamentals), Ok(1));
    assert_eq!(course.position(&overview), Ok(2));
    assert_eq!(course.position(&git), Ok(3));
}

#[test]
fn test_move_lecture_to_a_different_module() {
    let (fundamentals, overview, mut git) = sample_modules();
    let branching = fundamentals.lecture("Branching").cloned().unwrap();
    git.add(Lecture::new("Lecture 2", "https://youtube.com/8901")).unwrap();

    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(fundamentals.clone()).unwrap();
    course.add(overview).unwrap();
    course.add(git.clone()).unwrap();

    course.move_lecture(&branching, &fundamentals, &git, 2).unwrap();

    let fundamentals = course.module("Fundamentals").unwrap();
    let git = course.module("Source Control with Git on Azure DevOps").unwrap();
    assert_eq!(fundamentals.number_of_lectures(), 0);
    assert_eq!(git.number_of_lectures(), 3);
    assert_eq!(git.position(&branching), Ok(2));
    assert_eq!(git.children().names(), vec!["Introduction", "Branching", "Lecture 2"]);
}

#[test]
fn test_move_lecture_rolls_back_on_duplicate_name() {
    let (fundamentals, _, _) = sample_modules();
    let branching = fundamentals.lecture("Branching").cloned().unwrap();
    let other = module_with("Other", &[("Branching", "https://youtube.com/9999")]);

    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(fundamentals.clone()).unwrap();
    course.add(other.clone()).unwrap();

    let err = course.move_lecture(&branching, &fundamentals, &other, 1).unwrap_err();

    assert!(err.is_existing_element());
    let fundamentals = course.module("Fundamentals").unwrap();
    assert_eq!(fundamentals.position(&branching), Ok(1));
    let other = course.module("Other").unwrap();
    assert_eq!(other.number_of_lectures(), 1);
    assert_eq!(other.lecture("Branching").map(|l| l.url()), Some("https://youtube.com/9999"));
}

#[test]
fn test_move_lecture_with_unknown_module() {
    let (mut course, fundamentals, _, _) = sample_course();
    let branching = fundamentals.lecture("Branching").cloned().unwrap();
    let stranger = Module::new("Not in course");

    let err = course.move_lecture(&branching, &fundamentals, &stranger, 1).unwrap_err();

    assert_eq!(err, CollectionError::UnexistingElement { name: "Not in course".into() });
    assert_eq!(course.module("Fundamentals").map(|m| m.number_of_lectures()), Some(1));
}

#[test]
fn test_move_lecture_within_the_same_module() {
    let (fundamentals, _, _) = sample_modules();
    let mut module = fundamentals.clone();
    let pushing = Lecture::new("Pushing", "https://youtube.com/pushing");
    module.add(pushing.clone()).unwrap();

    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(module.clone()).unwrap();

    course.move_lecture(&pushing, &module, &module, 1).unwrap();

    let module = course.module("Fundamentals").unwrap();
    assert_eq!(module.children().names(), vec!["Pushing", "Branching"]);
}

#[test]
fn test_move_lecture_within_the_same_module_rejects_one_past_the_end() {
    let (fundamentals, _, _) = sample_modules();
    let mut module = fundamentals.clone();
    let branching = module.lecture("Branching").cloned().unwrap();
    module.add(Lecture::new("Pushing", "https://youtube.com/pushing")).unwrap();

    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(module.clone()).unwrap();

    // A transfer accepts len + 1, a move inside one module does not.
    let err = course.move_lecture(&branching, &module, &module, 3).unwrap_err();

    assert_eq!(err, CollectionError::InvalidPosition { position: 3, size: 2 });
    let module = course.module("Fundamentals").unwrap();
    assert_eq!(module.children().names(), vec!["Branching", "Pushing"]);
}

#[test]
fn test_move_unexisting_lecture_within_the_same_module() {
    let (mut course, fundamentals, _, _) = sample_course();
    let missing = Lecture::new("Pushing", "https://youtube.com/pushing");

    let err = course.move_lecture(&missing, &fundamentals, &fundamentals, 1).unwrap_err();

    assert_eq!(err, CollectionError::UnexistingElement { name: "Pushing".into() });
    let module = course.module("Fundamentals").unwrap();
    assert_eq!(module.children().names(), vec!["Branching"]);
}

#[test]
fn test_stored_module_names_stay_unique() {
    let mut course = Course::new("azure-devops", DESCRIPTION);
    course.add(Module::new("A")).unwrap();
    course.add(Module::new("B")).unwrap();

    // Stored modules are only reachable by shared reference, so a name cannot be
    // rewritten in place; a clash can only come through `add`, which rejects it.
    assert!(course.add(Module::new("A")).unwrap_err().is_existing_element());

    assert_eq!(course.children().names(), vec!["A", "B"]);
    assert_eq!(course.module("B").map(|m| m.name()), Some("B"));
    assert_eq!(course.position(&Module::new("A")), Ok(1));
    assert_eq!(course.position(&Module::new("B")), Ok(2));
}

#[test]
fn test_remove_module() {
    let mut course = Course::new("azure-devops", DESCRIPTION);
    let fundamentals = module_with("Fundamentals", &[("Branching", "https://youtube.com/1234")]);
    course.add(fundamentals.clone()).unwrap();

    let removed = course.remove(&fundamentals).unwrap();

    assert_eq!(course.number_of_modules(), 0);
    assert_eq!(removed, fundamentals);
}

#[test]
fn test_remove_unexisting_module() {
    let mut course = Course::new("azure-devops", DESCRIPTION);
    let err = course.remove(&Module::new("Fundamentals")).unwrap_err();
    assert!(err.is_unexisting_element());
}

#[test]
fn test_position_of_unexisting_module() {
    let course = Course::new("azure-devops", DESCRIPTION);
    let module = module_with("Fundamentals", &[("Branching", "https://youtube.com/1234")]);
    let err = course.position(&module).unwrap_err();
    assert!(err.is_unexisting_element());
}
