//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{ROUND_TRIP, TicketWorkspace};
use super::*;
use crate::solve::run_solve_with;
use itinerant_core::tickets::TicketParseError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct SolveWorld {
    workspace: TicketWorkspace,
    include_tickets: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        Self {
            workspace: TicketWorkspace::new(),
            include_tickets: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["itinerant".to_owned(), "solve".to_owned()];
        if *self.include_tickets.borrow() {
            argv.push(self.workspace.tickets().as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn expect_error<R>(&self, check: impl FnOnce(&CliError) -> R) -> R {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error)
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

#[given("a ticket file for the round trip out of JFK")]
fn round_trip_ticket_file(#[from(world)] world: &SolveWorld) {
    world.workspace.write_tickets(ROUND_TRIP);
}

#[given("a ticket file whose tickets admit no itinerary")]
fn unbalanced_ticket_file(#[from(world)] world: &SolveWorld) {
    world
        .workspace
        .write_tickets(&[("JFK", "SFO"), ("JFK", "ATL")]);
}

#[given("a ticket file that announces more tickets than it lists")]
fn truncated_ticket_file(#[from(world)] world: &SolveWorld) {
    world.workspace.write_raw("3\nJFK SFO\nSFO ATL\n");
}

#[given("I omit the ticket path")]
fn omit_ticket_path(#[from(world)] world: &SolveWorld) {
    *world.include_tickets.borrow_mut() = false;
}

#[given("I pass the flags {flags}")]
fn pass_flags(#[from(world)] world: &SolveWorld, flags: String) {
    world.cli_args.borrow_mut().extend(
        flags
            .trim_matches('"')
            .split_whitespace()
            .map(str::to_owned),
    );
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints the itinerary {stops}")]
fn command_prints_itinerary(#[from(world)] world: &SolveWorld, stops: String) {
    let borrowed = world.result.borrow();
    borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");

    let stdout = world.stdout_text();
    let expected: Vec<&str> = stops.trim_matches('"').split_whitespace().collect();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}

#[then("the command prints a JSON report with {count} stops")]
fn command_prints_json(#[from(world)] world: &SolveWorld, count: usize) {
    let stdout = world.stdout_text();
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be a JSON report");
    let stops = report["stops"].as_array().expect("stops array");
    assert_eq!(stops.len(), count);
    assert_eq!(report["origin"], DEFAULT_ORIGIN);
}

#[then("the command succeeds without output")]
fn command_succeeds_silently(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");
    assert!(world.stdout.borrow().is_empty());
}

#[then("the command fails because no itinerary exists")]
fn command_fails_without_itinerary(#[from(world)] world: &SolveWorld) {
    world.expect_error(|error| match error {
        CliError::Reconstruct { .. } => {}
        other => panic!("expected Reconstruct, found {other:?}"),
    });
}

#[then("the command fails because the ticket file is malformed")]
fn command_fails_malformed(#[from(world)] world: &SolveWorld) {
    world.expect_error(|error| match error {
        CliError::ParseTickets {
            source: TicketParseError::Truncated { .. },
            ..
        } => {}
        other => panic!("expected ParseTickets, found {other:?}"),
    });
}

#[then("the command fails because the ticket path is missing")]
fn command_fails_missing_ticket_path(#[from(world)] world: &SolveWorld) {
    world.expect_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_TICKETS),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_happy_path, "solving a ticket file");
register_solve_scenario!(solve_with_strategy, "choosing a strategy");
register_solve_scenario!(solve_json_report, "printing a JSON report");
register_solve_scenario!(solve_only_read, "only reading the ticket file");
register_solve_scenario!(solve_no_itinerary, "rejecting tickets without an itinerary");
register_solve_scenario!(solve_malformed, "rejecting malformed ticket files");
register_solve_scenario!(solve_missing_tickets, "rejecting missing ticket paths");
