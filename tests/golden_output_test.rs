use solid_recipe::framework::mock::Transcript;
use solid_recipe::framework::{Showcase, ShowcaseKind};
use solid_recipe::model::Principle;
use solid_recipe::{
    dependency_inversion, interface_segregation, liskov, open_closed, single_responsibility,
};

/// Runs one showcase against a transcript that expects exactly `lines`.
fn assert_golden(showcase: &dyn Showcase, lines: &[&str]) {
    let out = Transcript::new();
    out.expect_lines(lines.iter().copied());

    showcase.run(&out).expect("showcase failed");

    out.verify();
}

#[test]
fn single_responsibility_refactored() {
    assert_golden(
        &single_responsibility::showcase::SplitManagersShowcase,
        &[
            "User Kanishk added successfully.",
            "User Rohan added successfully.",
            "User Karan added successfully.",
            "User Vishnu added successfully.",
            "User Kanishk authenticated successfully.",
            "Authentication failed for Rohan.",
            "User with ID 1 removed.",
            "Authentication failed for Kanishk.",
        ],
    );
}

#[test]
fn single_responsibility_violation_prints_the_same_story() {
    let refactored = Transcript::new();
    let violation = Transcript::new();
    single_responsibility::showcase::SplitManagersShowcase
        .run(&refactored)
        .unwrap();
    single_responsibility::showcase::CombinedManagerShowcase
        .run(&violation)
        .unwrap();
    assert_eq!(refactored.lines(), violation.lines());
}

#[test]
fn open_closed_refactored() {
    assert_golden(
        &open_closed::showcase::InjectedDiscountShowcase,
        &[
            "Regular Discount: 50",
            "Premium Discount: 100",
            "Gold Discount: 150",
            "No Discount: 0",
            "Diamond Discount: 200",
        ],
    );
}

#[test]
fn open_closed_violation() {
    assert_golden(
        &open_closed::showcase::TaggedDiscountShowcase,
        &[
            "Regular Discount: 50",
            "Premium Discount: 100",
            "Gold Discount: 150",
            "No Discount: 0",
        ],
    );
}

#[test]
fn liskov_refactored() {
    assert_golden(
        &liskov::showcase::SecureLoanShowcase,
        &["Foreclosing home loan payment"],
    );
}

#[test]
fn liskov_violation_fails_after_the_home_loan() {
    let out = Transcript::new();
    let result = liskov::showcase::UnsupportedForeclosureShowcase.run(&out);

    let err = result.expect_err("credit card foreclosure must fail");
    assert_eq!(
        err.to_string(),
        "Method not implemented: foreclose_loan (credit card loan)"
    );
    assert_eq!(out.lines(), vec!["Foreclosing home loan payment"]);
}

#[test]
fn interface_segregation_refactored() {
    assert_golden(
        &interface_segregation::showcase::SegregatedInterfaceShowcase,
        &[
            "Sending notification for personal loan.",
            "Sending notification for business loan.",
        ],
    );
}

#[test]
fn interface_segregation_violation() {
    assert_golden(
        &interface_segregation::showcase::BroadInterfaceShowcase,
        &[
            "Sending notification for personal loan.",
            "Sending notification for business loan.",
            "Sending notification for car loan.",
        ],
    );
}

#[test]
fn dependency_inversion_refactored() {
    assert_golden(
        &dependency_inversion::showcase::InjectedDatabaseShowcase,
        &[
            "Connecting SQL database.",
            "Saving user data : [Kanishk] to DB : [SQL]",
            "Connecting NoSQL database.",
            "Saving user data : [Kanishk] to DB : [NoSQL]",
            "Connecting H2 in-memory database.",
            "Saving user data : [Kanishk] to DB : [H2]",
        ],
    );
}

#[test]
fn dependency_inversion_violation() {
    assert_golden(
        &dependency_inversion::showcase::HardwiredDatabaseShowcase,
        &["Connecting to database...", "Saving user data: John Doe"],
    );
}

#[test]
fn every_module_pairs_a_violation_with_a_fix() {
    let modules: [(Principle, Vec<Box<dyn Showcase>>); 5] = [
        (Principle::SingleResponsibility, single_responsibility::showcases()),
        (Principle::OpenClosed, open_closed::showcases()),
        (Principle::LiskovSubstitution, liskov::showcases()),
        (Principle::InterfaceSegregation, interface_segregation::showcases()),
        (Principle::DependencyInversion, dependency_inversion::showcases()),
    ];

    for (principle, showcases) in modules {
        let kinds: Vec<ShowcaseKind> = showcases.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![ShowcaseKind::Violation, ShowcaseKind::Refactored]);
        assert!(showcases.iter().all(|s| s.principle() == principle));
        assert!(showcases.iter().all(|s| s.title().starts_with(&principle.to_string())));
    }
}
