//! Command-line argument wrappers and command handlers
//!
//! Each command has a clap `Args` struct that converts into the matching
//! interface-agnostic parameter type from `yard_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Dispatcher
//! ```
//!
//! Clap owns flags, aliases and help text; parsing catalog values and the
//! order-check rule stay in the core.
//!
//! Every change goes through an edit session and [`Dispatcher::submit`].
//! When the board is locked the change comes back as a pending elevation;
//! with `--pin` it is replayed once, otherwise a view-only notice is shown.

use std::fmt;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use yard_core::{
    estimate::{
        minutes_to_pretty, rough_total_minutes, service_minutes, DEFAULT_BUFFER_MINUTES,
    },
    display::CompactBoard,
    models::DependencyPatch,
    params::{today, DependencyFields, EstimateTrip, ShowBoard, StopFields},
    CreateResult, DeleteResult, DispatchStatus, Dispatcher, MutationOutcome, OperationStatus,
    UpdateResult,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Show the board for a day
#[derive(Args, Default)]
pub struct BoardArgs {
    /// Day to show (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// Only show stops in this status
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Case-insensitive search over customer, job, address, crew, order,
    /// notes and supplier details
    #[arg(short = 'q', long)]
    pub search: Option<String>,
    /// One line per stop instead of full cards
    #[arg(short, long)]
    pub compact: bool,
}

impl From<BoardArgs> for ShowBoard {
    fn from(val: BoardArgs) -> Self {
        ShowBoard {
            date: val.date,
            status: val.status.map(|s| s.to_string()),
            search: val.search,
        }
    }
}

/// Stop fields shared by `stop add` and `stop update`
#[derive(Args, Default)]
pub struct StopFieldArgs {
    /// Delivery day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Time slot: 7-9, 9-11, 11-1, 1-3 or 3-5
    #[arg(long)]
    pub slot: Option<String>,
    /// Job or site name
    #[arg(long)]
    pub job: Option<String>,
    /// Delivery address
    #[arg(long)]
    pub address: Option<String>,
    /// Site contact phone
    #[arg(long)]
    pub phone: Option<String>,
    /// Delivery type: general, hand-1, hand-2, donkey, moffett or hotshot
    #[arg(long = "type", value_name = "TYPE")]
    pub delivery_type: Option<String>,
    /// Driver: Jaime, Max, Nolan, Ryan, Travis or Justin
    #[arg(long)]
    pub driver: Option<String>,
    /// Truck: int-1, int-2, int-2025 or ram-4500
    #[arg(long)]
    pub truck: Option<String>,
    /// Sales order or invoice reference
    #[arg(long)]
    pub order: Option<String>,
    /// Status; loading, out and delivered need the order checked
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Mark the order as checked (true) or unchecked (false)
    #[arg(long, value_name = "BOOL")]
    pub checked: Option<bool>,
    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl StopFieldArgs {
    fn into_fields(self, customer: Option<String>) -> StopFields {
        StopFields {
            date: self.date,
            time_slot: self.slot,
            customer,
            job_name: self.job,
            address: self.address,
            phone: self.phone,
            delivery_type: self.delivery_type,
            driver: self.driver,
            truck: self.truck,
            order_ref: self.order,
            status: self.status.map(|s| s.to_string()),
            dispatch_checked: self.checked,
            notes: self.notes,
        }
    }
}

/// Add a stop to the board
#[derive(Args)]
pub struct AddStopArgs {
    /// Customer name
    pub customer: String,
    #[command(flatten)]
    pub fields: StopFieldArgs,
}

impl From<AddStopArgs> for StopFields {
    fn from(val: AddStopArgs) -> Self {
        val.fields.into_fields(Some(val.customer))
    }
}

/// Change an existing stop
#[derive(Args)]
pub struct UpdateStopArgs {
    /// ID of the stop to update
    pub id: String,
    /// New customer name
    #[arg(long)]
    pub customer: Option<String>,
    #[command(flatten)]
    pub fields: StopFieldArgs,
}

impl UpdateStopArgs {
    /// Human-readable list of the fields this update touches.
    fn changes(&self) -> Vec<String> {
        let f = &self.fields;
        [
            ("customer", self.customer.is_some()),
            ("date", f.date.is_some()),
            ("time slot", f.slot.is_some()),
            ("job", f.job.is_some()),
            ("address", f.address.is_some()),
            ("phone", f.phone.is_some()),
            ("delivery type", f.delivery_type.is_some()),
            ("driver", f.driver.is_some()),
            ("truck", f.truck.is_some()),
            ("order", f.order.is_some()),
            ("order checked", f.checked.is_some()),
            ("status", f.status.is_some()),
            ("notes", f.notes.is_some()),
        ]
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| format!("Set {name}"))
        .collect()
    }
}

/// A stop ID argument
#[derive(Args)]
pub struct StopIdArgs {
    /// ID of the stop
    pub id: String,
}

#[derive(Subcommand)]
pub enum StopCommands {
    /// Add a stop to the board
    #[command(alias = "a")]
    Add(AddStopArgs),
    /// Show full details of a stop
    #[command(alias = "s")]
    Show(StopIdArgs),
    /// Change an existing stop
    #[command(alias = "u")]
    Update(UpdateStopArgs),
    /// Delete a stop
    #[command(aliases = ["d", "rm"])]
    Delete(StopIdArgs),
}

/// Dependency fields shared by `dep add` and `dep update`
#[derive(Args, Default)]
pub struct DependencyFieldArgs {
    /// Purchase order or other reference
    #[arg(long)]
    pub po: Option<String>,
    /// Expected arrival, free text
    #[arg(long)]
    pub eta: Option<String>,
    /// Whether the item is in the yard
    #[arg(long, value_name = "BOOL")]
    pub received: Option<bool>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl DependencyFieldArgs {
    fn into_fields(self, supplier: Option<String>) -> DependencyFields {
        DependencyFields {
            supplier,
            po_or_ref: self.po,
            eta: self.eta,
            received: self.received,
            notes: self.notes,
        }
    }
}

/// Add a supplier dependency to a stop
#[derive(Args)]
pub struct AddDependencyArgs {
    /// ID of the stop
    pub stop_id: String,
    /// Supplier name
    pub supplier: String,
    #[command(flatten)]
    pub fields: DependencyFieldArgs,
}

/// Change a supplier dependency
#[derive(Args)]
pub struct UpdateDependencyArgs {
    /// ID of the stop
    pub stop_id: String,
    /// ID of the dependency
    pub dep_id: String,
    /// New supplier name
    #[arg(long)]
    pub supplier: Option<String>,
    #[command(flatten)]
    pub fields: DependencyFieldArgs,
}

/// Remove a supplier dependency
#[derive(Args)]
pub struct RemoveDependencyArgs {
    /// ID of the stop
    pub stop_id: String,
    /// ID of the dependency
    pub dep_id: String,
}

#[derive(Subcommand)]
pub enum DepCommands {
    /// Add a supplier dependency to a stop
    #[command(alias = "a")]
    Add(AddDependencyArgs),
    /// Change a supplier dependency
    #[command(alias = "u")]
    Update(UpdateDependencyArgs),
    /// Remove a supplier dependency
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveDependencyArgs),
}

/// Rough round-trip time for a delivery
#[derive(Args)]
pub struct EstimateArgs {
    /// One-way drive time in minutes
    #[arg(long = "one-way", value_name = "MINUTES")]
    pub one_way_minutes: f64,
    /// Delivery type: general, hand-1, hand-2, donkey, moffett or hotshot
    #[arg(long = "type", value_name = "TYPE")]
    pub delivery_type: Option<String>,
    /// Extra minutes on top of driving and unloading (default 10)
    #[arg(long = "buffer", value_name = "MINUTES")]
    pub buffer_minutes: Option<f64>,
}

impl From<EstimateArgs> for EstimateTrip {
    fn from(val: EstimateArgs) -> Self {
        EstimateTrip {
            delivery_type: val.delivery_type,
            one_way_minutes: val.one_way_minutes,
            buffer_minutes: val.buffer_minutes,
        }
    }
}

/// Command-line representation of dispatch statuses.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Scheduled,
    Picking,
    /// Waiting on supplier
    Waiting,
    Loading,
    /// Out for delivery
    Out,
    Delivered,
    Canceled,
}

impl From<StatusArg> for DispatchStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Scheduled => DispatchStatus::Scheduled,
            StatusArg::Picking => DispatchStatus::Picking,
            StatusArg::Waiting => DispatchStatus::Waiting,
            StatusArg::Loading => DispatchStatus::Loading,
            StatusArg::Out => DispatchStatus::Out,
            StatusArg::Delivered => DispatchStatus::Delivered,
            StatusArg::Canceled => DispatchStatus::Canceled,
        }
    }
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DispatchStatus::from(*self).as_str())
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs commands against a dispatcher and renders the results.
pub struct Cli {
    dispatcher: Dispatcher,
    renderer: TerminalRenderer,
    pin: Option<String>,
}

impl Cli {
    pub fn new(dispatcher: Dispatcher, renderer: TerminalRenderer, pin: Option<String>) -> Self {
        Self {
            dispatcher,
            renderer,
            pin,
        }
    }

    pub fn show_board(&self, params: &ShowBoard, compact: bool) -> Result<()> {
        let board = self
            .dispatcher
            .show_board(params)
            .context("Failed to load board")?;
        if compact {
            self.renderer.render(&CompactBoard(&board).to_string())
        } else {
            self.renderer.render(&board.to_string())
        }
    }

    pub fn handle_stop_command(&mut self, command: StopCommands) -> Result<()> {
        match command {
            StopCommands::Add(args) => self.add_stop(&args.into()),
            StopCommands::Show(args) => self.show_stop(&args.id),
            StopCommands::Update(args) => {
                let changes = args.changes();
                let id = args.id.clone();
                let fields = args.fields.into_fields(args.customer);
                self.update_stop(&id, &fields, changes)
            }
            StopCommands::Delete(args) => self.delete_stop(&args.id),
        }
    }

    pub fn handle_dep_command(&mut self, command: DepCommands) -> Result<()> {
        match command {
            DepCommands::Add(args) => {
                let fields = args.fields.into_fields(Some(args.supplier));
                self.add_dependency(&args.stop_id, &fields)
            }
            DepCommands::Update(args) => {
                let fields = args.fields.into_fields(args.supplier);
                self.update_dependency(&args.stop_id, &args.dep_id, &fields)
            }
            DepCommands::Remove(args) => self.remove_dependency(&args.stop_id, &args.dep_id),
        }
    }

    pub fn estimate(&self, params: &EstimateTrip) -> Result<()> {
        let delivery_type = params.validate().context("Invalid estimate")?;
        let total = rough_total_minutes(
            params.one_way_minutes,
            delivery_type,
            params.buffer_minutes,
        );

        let mut output = format!("Rough round trip: {}\n\n", minutes_to_pretty(total));
        output.push_str(&format!(
            "- Drive: 2 × {} min\n",
            params.one_way_minutes
        ));
        output.push_str(&format!(
            "- Unload ({}): {} min\n",
            delivery_type.map_or("unknown type", |t| t.label()),
            service_minutes(delivery_type)
        ));
        output.push_str(&format!(
            "- Buffer: {} min\n",
            params
                .buffer_minutes
                .unwrap_or(DEFAULT_BUFFER_MINUTES)
        ));
        self.renderer.render(&output)
    }

    fn show_stop(&self, id: &str) -> Result<()> {
        match self.dispatcher.get_stop(id).context("Failed to load stop")? {
            Some(stop) => self.renderer.render(&stop.to_string()),
            None => self
                .renderer
                .render(&OperationStatus::failure(format!("Stop with ID {id} not found")).to_string()),
        }
    }

    fn add_stop(&mut self, fields: &StopFields) -> Result<()> {
        let mut session = self.dispatcher.new_session(today());
        fields.apply_to(&mut session)?;
        let outcome = self.dispatcher.submit(&mut session)?;
        self.finish(outcome, Vec::new())
    }

    fn update_stop(&mut self, id: &str, fields: &StopFields, changes: Vec<String>) -> Result<()> {
        let mut session = self.dispatcher.edit_session(id)?;
        fields.apply_to(&mut session)?;
        let outcome = self.dispatcher.submit(&mut session)?;
        self.finish(outcome, changes)
    }

    fn delete_stop(&mut self, id: &str) -> Result<()> {
        let outcome = self.dispatcher.delete_stop(id)?;
        self.finish(outcome, Vec::new())
    }

    fn add_dependency(&mut self, stop_id: &str, fields: &DependencyFields) -> Result<()> {
        let mut session = self.dispatcher.edit_session(stop_id)?;
        let dep_id = session.add_dependency();
        session.update_dependency(&dep_id, &DependencyPatch::from(fields))?;
        let outcome = self.dispatcher.submit(&mut session)?;
        self.finish(outcome, vec![format!("Added dependency {dep_id}")])
    }

    fn update_dependency(
        &mut self,
        stop_id: &str,
        dep_id: &str,
        fields: &DependencyFields,
    ) -> Result<()> {
        let patch = DependencyPatch::from(fields);
        if patch.is_empty() {
            return self.renderer.render(
                &OperationStatus::success(format!(
                    "No changes given for dependency {dep_id}; nothing to update"
                ))
                .to_string(),
            );
        }
        let mut session = self.dispatcher.edit_session(stop_id)?;
        session.update_dependency(dep_id, &patch)?;
        let outcome = self.dispatcher.submit(&mut session)?;
        self.finish(outcome, vec![format!("Updated dependency {dep_id}")])
    }

    fn remove_dependency(&mut self, stop_id: &str, dep_id: &str) -> Result<()> {
        let mut session = self.dispatcher.edit_session(stop_id)?;
        if !session.remove_dependency(dep_id) {
            return self.renderer.render(
                &OperationStatus::success(format!(
                    "Dependency {dep_id} is not on stop {stop_id}; nothing to remove"
                ))
                .to_string(),
            );
        }
        let outcome = self.dispatcher.submit(&mut session)?;
        self.finish(outcome, vec![format!("Removed dependency {dep_id}")])
    }

    /// Replay a blocked change with `--pin` if given, then render the result.
    fn finish(&mut self, outcome: MutationOutcome, changes: Vec<String>) -> Result<()> {
        let outcome = match (outcome, self.pin.as_deref()) {
            (MutationOutcome::ElevationRequired(pending), Some(pin)) => {
                debug!("Unlocking with --pin to replay the blocked change");
                self.dispatcher
                    .elevate(pending, pin)
                    .context("Failed to unlock dispatch editing")?
            }
            (outcome, _) => outcome,
        };

        let output = match outcome {
            MutationOutcome::Created(stop) => CreateResult::new(stop).to_string(),
            MutationOutcome::Updated(stop) => UpdateResult::with_changes(stop, changes).to_string(),
            MutationOutcome::Deleted(stop) => DeleteResult::new(stop).to_string(),
            MutationOutcome::Ignored => {
                OperationStatus::failure("Customer is required; nothing was saved".to_string())
                    .to_string()
            }
            MutationOutcome::ElevationRequired(_) => OperationStatus::view_only().to_string(),
        };
        self.renderer.render(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_arg_round_trips_through_core() {
        for arg in StatusArg::value_variants() {
            let status: DispatchStatus = arg.to_string().parse().unwrap();
            assert_eq!(status, DispatchStatus::from(*arg));
        }
    }

    #[test]
    fn test_update_changes_lists_given_fields() {
        let args = UpdateStopArgs {
            id: "s1".to_string(),
            customer: None,
            fields: StopFieldArgs {
                driver: Some("Max".to_string()),
                checked: Some(true),
                ..Default::default()
            },
        };
        assert_eq!(args.changes(), vec!["Set driver", "Set order checked"]);
    }

    #[test]
    fn test_board_args_into_params() {
        let params = ShowBoard::from(BoardArgs {
            date: Some("2025-03-14".to_string()),
            status: Some(StatusArg::Out),
            search: None,
            compact: false,
        });
        assert_eq!(params.status.as_deref(), Some("out"));
    }
}
