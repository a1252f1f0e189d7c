//! Command line surface of the front-desk binary

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use desk_client::{GuestScope, HotelApi};
use shared::models::{Booking, GuestDetail, GuestMatchQuery, ReservationStatus};
use shared::{GuestSearchCriteria, PageSlice, StatusFilter};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::actions::{PendingTransition, Transition};
use crate::auth::{AuthGate, AuthStatus};
use crate::config::AppConfig;
use crate::forms::{
    BookingAction, BookingForm, EntityForm, GuestAction, GuestForm, Modal, NewBookingForm,
    RegistrationForm, ReservationForm, UserForm,
};
use crate::preferences::Preferences;
use crate::view::{BookingCatalogView, Dashboard, FetchOutcome, GuestListView, GuestSummary};
use crate::DeskError;

#[derive(Debug, Parser)]
#[command(name = "front-desk", version, about = "Hotel front-desk client")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "FRONT_DESK_API_BASE")]
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "FRONT_DESK_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Directory for the daily log file
    #[arg(long, global = true, env = "FRONT_DESK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// UI preferences file
    #[arg(long, global = true, env = "FRONT_DESK_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Operator id to log in with
    #[arg(long, global = true, env = "FRONT_DESK_USER")]
    pub user: Option<String>,

    #[arg(long, global = true, env = "FRONT_DESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Flags override what the environment gave `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base) = &self.api_base {
            config.client = desk_client::ClientConfig::new(base.clone())
                .with_timeout(config.client.timeout);
        }
        if let Some(timeout) = self.timeout {
            config.client.timeout = timeout;
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        if let Some(prefs) = &self.prefs {
            config.prefs_path = prefs.clone();
        }
        if let (Some(id), Some(password)) = (&self.user, &self.password) {
            config.credentials = Some(shared::models::UserCredentials {
                id: id.clone(),
                password: password.clone(),
            });
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List or search all guests
    Guests(GuestsArgs),
    /// Guests currently staying
    Stay(ListArgs),
    /// Arrivals due today
    Arrivals(ListArgs),
    /// Departures due today
    Departures(ListArgs),
    /// Check a reservation in
    CheckIn(TransitionArgs),
    /// Check a reservation out
    CheckOut(TransitionArgs),
    /// Booking plan catalog
    Bookings(BookingsArgs),
    /// Today's counts and stays
    Dashboard,
    /// Register a stay, looking the guest up first
    Register(RegisterArgs),
    /// Edit a guest's details
    EditGuest(EditGuestArgs),
    /// Soft-delete or restore a guest
    ToggleGuest { guest_id: String },
    /// Add a reservation to a known guest
    Reserve(ReserveArgs),
    /// Edit a reservation
    EditReservation(EditReservationArgs),
    /// Register a booking plan
    RegisterBooking(RegisterBookingArgs),
    /// Make a booking plan available or unavailable
    TogglePlan { booking_id: String },
    /// Register an operator account
    RegisterUser(RegisterUserArgs),
    /// End the session
    Logout,
    /// Show or change UI preferences
    Prefs(PrefsArgs),
}

impl Command {
    /// Whether the command needs a logged-in session
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Prefs(_) | Self::RegisterUser(_))
    }
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// `all` or a reservation status such as `checked-in`
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Include soft-deleted guests
    #[arg(long)]
    pub show_deleted: bool,
}

#[derive(Debug, Clone, Args)]
pub struct GuestsArgs {
    #[command(flatten)]
    pub list: ListArgs,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub kana: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub check_in: Option<NaiveDate>,
    #[arg(long)]
    pub check_out: Option<NaiveDate>,
}

impl GuestsArgs {
    fn criteria(&self) -> GuestSearchCriteria {
        GuestSearchCriteria {
            name: self.name.clone(),
            kana_name: self.kana.clone(),
            phone: self.phone.clone(),
            check_in_date: self.check_in,
            check_out_date: self.check_out,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct TransitionArgs {
    pub reservation_id: String,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Debug, Clone, Args)]
pub struct BookingsArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub show_unavailable: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub kana: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub gender: String,
    #[arg(long, default_value = "")]
    pub age: String,
    #[arg(long, default_value = "")]
    pub region: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Booking plan id
    #[arg(long)]
    pub plan: String,
    /// Defaults to today
    #[arg(long)]
    pub check_in: Option<String>,
    #[arg(long, default_value = "1")]
    pub stay_days: String,
    #[arg(long, default_value = "")]
    pub memo: String,
}

#[derive(Debug, Clone, Args)]
pub struct EditGuestArgs {
    pub guest_id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub kana: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ReserveArgs {
    pub guest_id: String,
    #[arg(long)]
    pub plan: String,
    #[arg(long)]
    pub check_in: String,
    #[arg(long, default_value = "1")]
    pub stay_days: String,
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub memo: String,
}

#[derive(Debug, Clone, Args)]
pub struct EditReservationArgs {
    pub reservation_id: String,
    #[arg(long)]
    pub status: Option<ReservationStatus>,
    #[arg(long)]
    pub plan: Option<String>,
    #[arg(long)]
    pub check_in: Option<String>,
    #[arg(long)]
    pub stay_days: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct RegisterBookingArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Clone, Args)]
pub struct RegisterUserArgs {
    /// Id of the new account
    pub new_id: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Args)]
pub struct PrefsArgs {
    #[arg(long)]
    pub sidebar_collapsed: Option<bool>,
    #[arg(long)]
    pub show_deleted: Option<bool>,
}

/// Log in when credentials are configured, then check the session.
pub async fn ensure_session(config: &AppConfig, api: Arc<dyn HotelApi>) -> anyhow::Result<()> {
    let gate = AuthGate::new(api);
    if let Some(creds) = &config.credentials {
        let form = UserForm {
            id: creds.id.clone(),
            password: creds.password.clone(),
        };
        gate.login(&form).await.map_err(explain)?;
    }
    if gate.probe().await == AuthStatus::LoginRequired {
        bail!("Login required: set FRONT_DESK_USER and FRONT_DESK_PASSWORD or pass --user/--password");
    }
    Ok(())
}

pub async fn run(command: Command, config: &AppConfig, api: Arc<dyn HotelApi>) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let prefs = Preferences::load(&config.prefs_path)
        .with_context(|| format!("reading {}", config.prefs_path.display()))?;

    match command {
        Command::Guests(args) => {
            let view = list_view(api, GuestScope::All, &args.list, &prefs);
            view.search(args.criteria()).await;
            print_guests(&view, &args.list)?;
        }
        Command::Stay(args) => show_scope(api, GuestScope::Staying, &args, &prefs).await?,
        Command::Arrivals(args) => {
            show_scope(api, GuestScope::ArrivalsToday, &args, &prefs).await?
        }
        Command::Departures(args) => {
            show_scope(api, GuestScope::DeparturesToday, &args, &prefs).await?
        }
        Command::CheckIn(args) => {
            transition(api, GuestScope::ArrivalsToday, Transition::CheckIn, &args).await?
        }
        Command::CheckOut(args) => {
            transition(api, GuestScope::Staying, Transition::CheckOut, &args).await?
        }
        Command::Bookings(args) => {
            let view = BookingCatalogView::new(api);
            view.set_show_unavailable(args.show_unavailable);
            if view.load().await == FetchOutcome::Failed {
                bail!(view.error().unwrap_or_default());
            }
            view.set_page(args.page);
            print!("{}", render_bookings(&view.page()));
        }
        Command::Dashboard => {
            let dashboard = Dashboard::load(api.as_ref(), today).await.map_err(explain)?;
            print!("{}", render_dashboard(&dashboard, today));
        }
        Command::Register(args) => {
            let query = GuestMatchQuery {
                name: args.name.clone(),
                kana_name: args.kana.clone(),
                phone: args.phone.clone(),
            };
            let mut form = RegistrationForm::lookup(api.as_ref(), &query, today)
                .await
                .map_err(explain)?;
            if form.is_existing_guest() {
                println!("Found existing guest {} ({})", form.name, form.guest_id);
            } else {
                fill_new_guest(&mut form, &args);
            }
            form.booking_id = args.plan;
            if let Some(date) = args.check_in {
                form.check_in_date = date;
            }
            form.stay_days = args.stay_days;
            form.memo = args.memo;
            submit(&Modal::new(api), form, ()).await?;
        }
        Command::EditGuest(args) => {
            let view = Arc::new(GuestListView::new(api.clone(), GuestScope::All));
            let guest = load_guest(&view, &args.guest_id).await?;
            let mut form = GuestForm::from_guest(&guest.guest);
            apply_guest_edits(&mut form, &args);
            let modal = Modal::new(api).with_refresh(view);
            submit(&modal, form, GuestAction::Save).await?;
        }
        Command::ToggleGuest { guest_id } => {
            let view = Arc::new(GuestListView::new(api.clone(), GuestScope::All));
            view.set_show_deleted(true);
            let guest = load_guest(&view, &guest_id).await?;
            let form = GuestForm::from_guest(&guest.guest);
            println!("{}: {}", form.toggle_label(), form.name);
            let modal = Modal::new(api).with_refresh(view);
            submit(&modal, form, GuestAction::ToggleDeleted).await?;
        }
        Command::Reserve(args) => {
            let mut form = ReservationForm::new_for_guest(args.guest_id);
            form.booking_id = args.plan;
            form.check_in_date = args.check_in;
            form.stay_days = args.stay_days;
            form.total_price = args.price;
            form.memo = args.memo;
            submit(&Modal::new(api), form, ()).await?;
        }
        Command::EditReservation(args) => {
            let view = Arc::new(GuestListView::new(api.clone(), GuestScope::All));
            view.set_show_deleted(true);
            fetch(&view).await?;
            let (_, reservation) = view
                .find_reservation(&args.reservation_id)
                .ok_or_else(|| DeskError::NotFound(format!("reservation {}", args.reservation_id)))
                .map_err(explain)?;
            let mut form = ReservationForm::from_reservation(&reservation);
            apply_reservation_edits(&mut form, args);
            let modal = Modal::new(api).with_refresh(view);
            submit(&modal, form, ()).await?;
        }
        Command::RegisterBooking(args) => {
            let form = NewBookingForm {
                name: args.name,
                description: args.description,
                price: args.price,
            };
            submit(&Modal::new(api), form, ()).await?;
        }
        Command::TogglePlan { booking_id } => {
            let view = Arc::new(BookingCatalogView::new(api.clone()));
            if view.load().await == FetchOutcome::Failed {
                bail!(view.error().unwrap_or_default());
            }
            let plan = view
                .find(&booking_id)
                .ok_or_else(|| DeskError::NotFound(format!("booking plan {booking_id}")))
                .map_err(explain)?;
            let form = BookingForm::from_booking(&plan);
            println!("{}: {}", form.toggle_label(), form.name);
            let modal = Modal::new(api).with_refresh(view);
            submit(&modal, form, BookingAction::ToggleAvailable).await?;
        }
        Command::RegisterUser(args) => {
            let form = UserForm {
                id: args.new_id,
                password: args.new_password,
            };
            submit(&Modal::new(api), form, ()).await?;
        }
        Command::Logout => {
            AuthGate::new(api).logout().await.map_err(explain)?;
            println!("Logged out");
        }
        Command::Prefs(args) => {
            let mut prefs = prefs;
            let changed = args.sidebar_collapsed.is_some() || args.show_deleted.is_some();
            if let Some(collapsed) = args.sidebar_collapsed {
                prefs.sidebar_collapsed = collapsed;
            }
            if let Some(show) = args.show_deleted {
                prefs.show_deleted = show;
            }
            if changed {
                prefs.save(&config.prefs_path)?;
            }
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
    }
    Ok(())
}

fn list_view(
    api: Arc<dyn HotelApi>,
    scope: GuestScope,
    args: &ListArgs,
    prefs: &Preferences,
) -> GuestListView {
    let view = GuestListView::new(api, scope);
    view.set_show_deleted(args.show_deleted || prefs.show_deleted);
    view.set_status_filter(args.status);
    view
}

async fn show_scope(
    api: Arc<dyn HotelApi>,
    scope: GuestScope,
    args: &ListArgs,
    prefs: &Preferences,
) -> anyhow::Result<()> {
    let view = list_view(api, scope, args, prefs);
    view.load_all().await;
    print_guests(&view, args)
}

fn print_guests(view: &GuestListView, args: &ListArgs) -> anyhow::Result<()> {
    if let Some(error) = view.error() {
        bail!(error);
    }
    view.set_page(args.page);
    print!("{}", render_guests(&view.page()));
    Ok(())
}

async fn fetch(view: &GuestListView) -> anyhow::Result<()> {
    if view.load_all().await == FetchOutcome::Failed {
        bail!(view.error().unwrap_or_default());
    }
    Ok(())
}

async fn load_guest(view: &GuestListView, guest_id: &str) -> anyhow::Result<GuestDetail> {
    fetch(view).await?;
    view.items()
        .into_iter()
        .find(|d| d.guest.id == guest_id)
        .ok_or_else(|| DeskError::NotFound(format!("guest {guest_id}")))
        .map_err(explain)
}

async fn transition(
    api: Arc<dyn HotelApi>,
    scope: GuestScope,
    kind: Transition,
    args: &TransitionArgs,
) -> anyhow::Result<()> {
    let view = GuestListView::new(api, scope);
    fetch(&view).await?;
    let pending =
        PendingTransition::prepare(&view, kind, &args.reservation_id).map_err(explain)?;
    if !args.yes && !ask(&pending.prompt()).await? {
        println!("Cancelled");
        return Ok(());
    }
    let message = pending.confirm(&view).await.map_err(explain)?;
    println!("{message}");
    Ok(())
}

async fn ask(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

async fn submit<F: EntityForm>(modal: &Modal<F>, form: F, action: F::Action) -> anyhow::Result<()> {
    modal.open(form).map_err(explain)?;
    let message = modal.submit(action).await.map_err(explain)?;
    println!("{message}");
    Ok(())
}

fn fill_new_guest(form: &mut RegistrationForm, args: &RegisterArgs) {
    form.gender = args.gender.clone();
    form.age = args.age.clone();
    form.region = args.region.clone();
    form.email = args.email.clone();
}

fn apply_guest_edits(form: &mut GuestForm, args: &EditGuestArgs) {
    let edits = [
        (&mut form.name, &args.name),
        (&mut form.kana_name, &args.kana),
        (&mut form.gender, &args.gender),
        (&mut form.age, &args.age),
        (&mut form.region, &args.region),
        (&mut form.email, &args.email),
        (&mut form.phone, &args.phone),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            *field = value.clone();
        }
    }
}

fn apply_reservation_edits(form: &mut ReservationForm, args: EditReservationArgs) {
    if let Some(status) = args.status {
        form.status = status;
    }
    let edits = [
        (&mut form.booking_id, args.plan),
        (&mut form.check_in_date, args.check_in),
        (&mut form.stay_days, args.stay_days),
        (&mut form.total_price, args.price),
        (&mut form.memo, args.memo),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            *field = value;
        }
    }
}

/// Error text for the operator, with per-field messages when there are any.
fn explain(err: DeskError) -> anyhow::Error {
    let mut text = err.user_message();
    if let Some(fields) = err.field_errors() {
        for (field, message) in fields {
            let _ = write!(text, "\n  {field}: {message}");
        }
    }
    anyhow::anyhow!(text)
}

// ========== Rendering ==========

fn footer(out: &mut String, first: usize, last: usize, total: usize, page: usize, pages: usize) {
    let _ = writeln!(out, "Showing {first}-{last} of {total} (page {page}/{pages})");
}

pub fn render_guests(page: &PageSlice<GuestDetail>) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("No guests.\n");
        return out;
    }
    for detail in &page.items {
        let summary = GuestSummary::from_detail(detail);
        let _ = writeln!(
            out,
            "{}{} ({})  {}  {}  {}",
            if summary.deleted { "[deleted] " } else { "" },
            summary.name,
            summary.kana_name,
            summary.phone,
            summary.plan_name,
            summary.latest_status.map(|s| s.label()).unwrap_or("-"),
        );
        for r in &detail.reservations {
            let _ = writeln!(
                out,
                "    {}  {} -> {}  {}  {}",
                r.id,
                r.check_in_date,
                r.check_out(),
                r.status.label(),
                detail.plan_name(r),
            );
        }
    }
    footer(&mut out, page.first, page.last, page.total, page.page, page.total_pages);
    out
}

pub fn render_bookings(page: &PageSlice<Booking>) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("No booking plans.\n");
        return out;
    }
    for b in &page.items {
        let _ = writeln!(
            out,
            "{}  {}  {}{}",
            b.id,
            b.name,
            b.price,
            if b.is_available { "" } else { "  (unavailable)" }
        );
    }
    footer(&mut out, page.first, page.last, page.total, page.page, page.total_pages);
    out
}

pub fn render_dashboard(dashboard: &Dashboard, today: NaiveDate) -> String {
    let s = &dashboard.summary;
    let mut out = String::new();
    let _ = writeln!(out, "Front desk, {today}");
    let _ = writeln!(out, "  Staying guests:      {}", s.staying_guests);
    let _ = writeln!(out, "  Check-ins today:     {}", s.check_ins_today);
    let _ = writeln!(out, "  Check-outs today:    {}", s.check_outs_today);
    let _ = writeln!(out, "  Late arrivals:       {}", s.late_arrivals);
    let _ = writeln!(out, "  Overdue departures:  {}", s.overdue_departures);
    for stay in &dashboard.stays {
        let _ = writeln!(
            out,
            "  {}  {}  {}  {}  until {}",
            stay.reservation_id, stay.guest_name, stay.plan_name, stay.phone, stay.check_out
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{booking, fake_today, forty_five_guests, guest_detail};
    use clap::CommandFactory;
    use shared::PAGE_SIZE;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_guest_search() {
        let cli = Cli::try_parse_from([
            "front-desk",
            "guests",
            "--kana",
            "たなか",
            "--status",
            "checked-in",
            "--page",
            "2",
        ])
        .unwrap();
        let Command::Guests(args) = cli.command else {
            panic!("expected guests");
        };
        assert_eq!(args.list.page, 2);
        assert_eq!(
            args.list.status,
            StatusFilter::Only(ReservationStatus::CheckedIn)
        );
        assert_eq!(args.criteria().normalized().kana_name, "タナカ");
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "front-desk",
            "--api-base",
            "http://hotel.local:9000/",
            "--timeout",
            "5",
            "--user",
            "front01",
            "--password",
            "secret",
            "dashboard",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.client.base_url, "http://hotel.local:9000");
        assert_eq!(config.client.timeout, 5);
        assert_eq!(config.credentials.unwrap().id, "front01");
        assert!(cli.command.requires_session());
    }

    #[test]
    fn test_prefs_needs_no_session() {
        let cli = Cli::try_parse_from(["front-desk", "prefs", "--show-deleted", "true"]).unwrap();
        assert!(!cli.command.requires_session());
    }

    #[test]
    fn test_render_guests() {
        let mut detail = guest_detail(1, true);
        detail.guest.phone.clear();
        let page = PageSlice::cut(&[detail], 1, PAGE_SIZE);
        let out = render_guests(&page);
        assert!(out.starts_with("[deleted] Guest 1 (タナカ)  No phone  Breakfast  Awaiting check-in\n"));
        assert!(out.contains("    R1  2025-08-10 -> 2025-08-11  Awaiting check-in  Breakfast\n"));
        assert!(out.ends_with("Showing 1-1 of 1 (page 1/1)\n"));
    }

    #[test]
    fn test_render_second_page() {
        let page = PageSlice::cut(&forty_five_guests(), 3, PAGE_SIZE);
        assert!(render_guests(&page).ends_with("Showing 41-45 of 45 (page 3/3)\n"));
        let empty: PageSlice<GuestDetail> = PageSlice::cut(&[], 1, PAGE_SIZE);
        assert_eq!(render_guests(&empty), "No guests.\n");
    }

    #[test]
    fn test_render_bookings() {
        let mut closed = booking("B2", "Room only", 8000);
        closed.is_available = false;
        let page = PageSlice::cut(&[booking("B1", "Breakfast", 12000), closed], 1, PAGE_SIZE);
        let out = render_bookings(&page);
        assert!(out.contains("B1  Breakfast  12000\n"));
        assert!(out.contains("B2  Room only  8000  (unavailable)\n"));
    }

    #[test]
    fn test_render_dashboard() {
        let dashboard = Dashboard::from_details(&[guest_detail(1, false)], fake_today());
        let out = render_dashboard(&dashboard, fake_today());
        assert!(out.contains("Check-ins today:     1"));
        assert!(out.contains("R1  Guest 1  Breakfast  09000000001  until 2025-08-11"));
    }

    #[test]
    fn test_explain_lists_fields() {
        let err = explain(DeskError::field("name", "Name is required"));
        assert_eq!(
            err.to_string(),
            "Please check the highlighted fields.\n  name: Name is required"
        );
    }
}
