use crate::command::WscCommand;
use crate::fs::read_json;
use anyhow::{Result, bail};
use clap::Args;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;
use wsc_core::form::{FormError, TemplateVariablesFormState};
use wsc_models::dtos::{TemplateVersionWithVariables, VariableType};
use wsc_utils::term;
use wsc_utils::variables::parse_variables;

const SENSITIVE_MASK: &str = "********";

#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    var_type: &'static str,
    #[tabled(rename = "Required")]
    required: bool,
    #[tabled(rename = "Sensitive")]
    sensitive: bool,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Changed")]
    changed: bool,
    #[tabled(rename = "Error")]
    error: String,
}

#[derive(Args)]
#[command(about = "Fills in the variables of a template version and builds the create request")]
pub struct VariablesCommand {
    #[arg(short = 'f', long = "file", required = true, help = "Path to a json file with the template version and its variables")]
    file: PathBuf,

    #[arg(long = "var", help = "Sets the value of a template variable in the format name=value")]
    variables: Vec<String>,

    #[arg(long = "submit", help = "Validates the values and prints the create template version request")]
    submit: bool,
}

impl VariablesCommand {
    fn apply_overrides(
        form: &mut TemplateVariablesFormState,
        overrides: &[(String, String)],
    ) -> Result<()> {
        for (name, value) in overrides {
            let Some(index) = form.variables().iter().position(|v| &v.name == name) else {
                bail!("template variable {name} not found");
            };
            debug!("setting template variable {name}");
            form.set_value(index, value)?;
        }
        Ok(())
    }

    fn type_name(var_type: VariableType) -> &'static str {
        match var_type {
            VariableType::String => "string",
            VariableType::Number => "number",
            VariableType::Bool => "bool",
        }
    }

    fn rows(form: &TemplateVariablesFormState) -> Vec<VariableRow> {
        form.variables()
            .iter()
            .enumerate()
            .filter_map(|(index, variable)| {
                let field = form.field(index, None, None)?;
                let changed = form
                    .initial_values()
                    .get(index)
                    .is_some_and(|initial| initial.value != field.value);
                let value = if variable.sensitive && !field.value.is_empty() {
                    SENSITIVE_MASK.to_string()
                } else {
                    field.value
                };
                let error = if field.error {
                    field.helper_text.unwrap_or_default()
                } else {
                    String::new()
                };
                Some(VariableRow {
                    name: variable.name.clone(),
                    var_type: Self::type_name(variable.var_type),
                    required: variable.required,
                    sensitive: variable.sensitive,
                    value,
                    changed,
                    error,
                })
            })
            .collect()
    }

    fn print_table(form: &TemplateVariablesFormState) {
        let mut table = Table::new(Self::rows(form));
        table.with(Style::modern());
        println!("{table}");
    }
}

impl WscCommand for VariablesCommand {
    fn exec(self) -> Result<()> {
        let input: TemplateVersionWithVariables = read_json(&self.file)?;
        let mut form =
            TemplateVariablesFormState::new(&input.template_version, &input.variables);

        let overrides = parse_variables(&self.variables)?;
        Self::apply_overrides(&mut form, &overrides)?;

        if !self.submit {
            Self::print_table(&form);
            return Ok(());
        }

        let result = form.submit();
        Self::print_table(&form);

        match result {
            Ok(request) => {
                term::print_info("Create template version request:")?;
                println!("{}", serde_json::to_string_pretty(&request)?);
                Ok(())
            }
            Err(FormError::Invalid(errors)) => {
                for error in &errors {
                    term::print_error(&format!("{}: {}", error.name, error.message))?;
                }
                bail!("{} template variable(s) failed validation", errors.len())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wsc_models::dtos::{TemplateVersion, TemplateVersionVariable};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        command: VariablesCommand,
    }

    fn form() -> TemplateVariablesFormState {
        let variables = vec![
            TemplateVersionVariable {
                name: "region".to_string(),
                required: true,
                ..Default::default()
            },
            TemplateVersionVariable {
                name: "token".to_string(),
                sensitive: true,
                ..Default::default()
            },
        ];
        TemplateVariablesFormState::new(&TemplateVersion::default(), &variables)
    }

    #[test]
    fn cli_variables_file_arg_is_required() {
        assert!(TestCli::try_parse_from(["variables"]).is_err());
    }

    #[test]
    fn cli_variables_accepts_multiple_vars() {
        let cli = TestCli::try_parse_from([
            "variables",
            "-f",
            "version.json",
            "--var",
            "region=eu",
            "--var",
            "token=abc",
            "--submit",
        ])
        .unwrap();

        assert_eq!(cli.command.file, PathBuf::from("version.json"));
        assert_eq!(cli.command.variables, vec!["region=eu", "token=abc"]);
        assert!(cli.command.submit);
    }

    #[test]
    fn overrides_are_applied_by_name() {
        let mut form = form();
        let overrides = vec![("region".to_string(), "eu-west-1".to_string())];

        VariablesCommand::apply_overrides(&mut form, &overrides).unwrap();
        assert_eq!(form.values()[0].value, "eu-west-1");
        assert!(form.is_touched(0));
        assert!(!form.is_touched(1));
    }

    #[test]
    fn unknown_override_is_an_error() {
        let mut form = form();
        let overrides = vec![("zone".to_string(), "a".to_string())];

        assert!(VariablesCommand::apply_overrides(&mut form, &overrides).is_err());
    }

    #[test]
    fn rows_mask_sensitive_values_and_show_touched_errors() {
        let mut form = form();
        form.set_value(1, "secret").unwrap();
        assert!(form.submit().is_err());

        let rows = VariablesCommand::rows(&form);
        assert_eq!(rows[0].error, "Variable is required.");
        assert_eq!(rows[1].value, SENSITIVE_MASK);
        assert!(rows[1].changed);
        assert!(!rows[0].changed);
        assert_eq!(rows[1].error, "");
    }
}
