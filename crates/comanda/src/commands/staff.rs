use clap::ArgMatches;
use tracing::{error, info};

use comanda_core::EmployeeForm;

use super::helpers::{
    Context, print_alerts, print_json, print_view, report_action_error, report_api_error,
};
use crate::color;
use crate::table::format_rows;

pub(crate) async fn handle_staff_command(
    ctx: &Context,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub)) => handle_list(ctx, sub).await,
        Some(("create", sub)) => handle_create(ctx, sub).await,
        Some(("availability", sub)) => {
            if sub.get_flag("json") {
                print_json(
                    "Failed to check staff availability",
                    ctx.dashboard.backend().staff_availability().await,
                )
            } else {
                print_view(ctx.dashboard.show_staff_availability().await)
            }
        }
        _ => {
            error!(event = "cli.staff.subcommand_unknown");
            Err("Unknown staff command".into())
        }
    }
}

async fn handle_list(ctx: &Context, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let employees = match ctx.dashboard.backend().list_employees().await {
        Ok(employees) => employees,
        Err(e) => {
            report_api_error("Failed to load employees", &e);
            return Err(e.into());
        }
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&employees)?);
        return Ok(());
    }

    if employees.is_empty() {
        println!("{}", color::muted("No employees registered"));
        return Ok(());
    }

    let rows: Vec<Vec<String>> = employees
        .iter()
        .map(|e| vec![e.id.to_string(), e.name.clone(), e.email.clone()])
        .collect();
    let lines = format_rows(&["ID", "Name", "Email"], &rows);
    if let Some((header, body)) = lines.split_first() {
        println!("{}", color::bold(header));
        for line in body {
            println!("{}", line);
        }
    }
    println!();
    println!("{} employees registered", employees.len());

    info!(event = "cli.staff.list_completed", count = employees.len());
    Ok(())
}

async fn handle_create(ctx: &Context, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let arg = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();
    let form = EmployeeForm {
        name: arg("name"),
        email: arg("email"),
        password: arg("password"),
    };

    match ctx.dashboard.create_employee(&form).await {
        Ok(employee) => {
            print_alerts(&ctx.dashboard).await;
            println!("  #{} {} <{}>", employee.id, employee.name, employee.email);
            Ok(())
        }
        Err(e) => {
            report_action_error(&e);
            Err(e.into())
        }
    }
}
