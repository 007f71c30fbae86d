/// What a single install step executes.
#[derive(Debug, Clone, Copy)]
pub enum StepAction {
    /// Run `program` with `args` directly.
    Run {
        program: &'static str,
        args: &'static [&'static str],
    },
    /// Run a script through `bash -c`, for pipelines and redirections.
    Shell(&'static str),
}

/// One step of a recipe: a progress message plus the command behind it.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Shown before the command runs and used in the failure message.
    pub info: &'static str,
    pub action: StepAction,
    /// A failing optional step is reported as a warning and skipped.
    pub optional: bool,
}

impl Step {
    pub const fn run(
        info: &'static str,
        program: &'static str,
        args: &'static [&'static str],
    ) -> Self {
        Self {
            info,
            action: StepAction::Run { program, args },
            optional: false,
        }
    }

    pub const fn shell(info: &'static str, script: &'static str) -> Self {
        Self {
            info,
            action: StepAction::Shell(script),
            optional: false,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    /// The program and argument list this step spawns.
    pub fn command_line(&self) -> (&'static str, Vec<&'static str>) {
        match self.action {
            StepAction::Run { program, args } => (program, args.to_vec()),
            StepAction::Shell(script) => ("bash", vec!["-c", script]),
        }
    }
}

/// An ordered list of steps that installs one service, plus notes printed
/// after a successful run.
#[derive(Debug)]
pub struct Recipe {
    pub steps: &'static [Step],
    pub notes: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_step_command_line() {
        let step = Step::run("install nginx", "sudo", &["apt-get", "install", "-y", "nginx"]);
        let (program, args) = step.command_line();
        assert_eq!(program, "sudo");
        assert_eq!(args, vec!["apt-get", "install", "-y", "nginx"]);
        assert!(!step.optional);
    }

    #[test]
    fn test_shell_step_goes_through_bash() {
        let step = Step::shell("add repo", "echo hi | tee /dev/null");
        let (program, args) = step.command_line();
        assert_eq!(program, "bash");
        assert_eq!(args, vec!["-c", "echo hi | tee /dev/null"]);
    }

    #[test]
    fn test_optional_marks_step() {
        let step = Step::run("remove old packages", "true", &[]).optional();
        assert!(step.optional);
        assert_eq!(step.info, "remove old packages");
    }
}
