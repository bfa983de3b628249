pub mod checklist;
pub mod probe;
pub mod validator;

pub use checklist::{ImportCheck, PathCheck, PathKind, SetupChecklist};
pub use probe::{ProbeError, PythonEnv, PythonInterpreter};
pub use validator::{
    run_validation, CheckOutcome, SmokeTest, ValidationReport, SMOKE_ANSWER, SMOKE_PROBLEM,
};
