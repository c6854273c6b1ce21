use chrono::{
    DateTime,
    NaiveDate,
    NaiveDateTime,
    Utc,
};
use clap::{
    Parser,
    Subcommand,
};
use empcore::{
    country::Country,
    entity::RestEntity,
    request::{
        RequestOptions,
        Search,
    },
    response::EntityResponse,
    service::EntityService,
    vacation::Vacation,
};
use empclient::Builder;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    platform_builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Vacation {
        #[command(subcommand)]
        cmd: VacationCmd,
    },
    #[command(arg_required_else_help = true)]
    Country {
        #[command(subcommand)]
        cmd: CountryCmd,
    },
}

#[derive(Debug, Subcommand)]
enum VacationCmd {
    #[command(flatten)]
    Common(EntityCmd),
    Create {
        #[clap(long, value_parser = parse_date)]
        start_date: Option<DateTime<Utc>>,
        #[clap(long, value_parser = parse_date)]
        end_date: Option<DateTime<Utc>>,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[clap(long, value_parser = parse_date)]
        start_date: Option<DateTime<Utc>>,
        #[clap(long, value_parser = parse_date)]
        end_date: Option<DateTime<Utc>>,
    },
    #[command(arg_required_else_help = true)]
    Patch {
        id: i64,
        #[clap(long, value_parser = parse_date)]
        start_date: Option<DateTime<Utc>>,
        #[clap(long, value_parser = parse_date)]
        end_date: Option<DateTime<Utc>>,
    },
}

#[derive(Debug, Subcommand)]
enum CountryCmd {
    #[command(flatten)]
    Common(EntityCmd),
    Create {
        #[clap(long)]
        country_name: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[clap(long)]
        country_name: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Patch {
        id: i64,
        #[clap(long)]
        country_name: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum EntityCmd {
    List {
        #[clap(long)]
        page: Option<u32>,
        #[clap(long)]
        size: Option<u32>,
        #[clap(long)]
        sort: Vec<String>,
        /// Additional filter given as `key=value`; may be repeated.
        #[clap(long, value_parser = parse_filter)]
        filter: Vec<(String, String)>,
    },
    #[command(arg_required_else_help = true)]
    Search {
        query: String,
        #[clap(long)]
        page: Option<u32>,
        #[clap(long)]
        size: Option<u32>,
        #[clap(long)]
        sort: Vec<String>,
    },
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
}

fn parse_filter(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("filter must be in the form key=value: {arg}"))
}

/// Accepts RFC 3339, `%Y-%m-%dT%H:%M` or a bare `%Y-%m-%d`, all taken as UTC.
fn parse_date(arg: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(value) = DateTime::parse_from_rfc3339(arg) {
        return Ok(value.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(arg, "%Y-%m-%dT%H:%M")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(arg, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0)))
        .map(|value| DateTime::from_naive_utc_and_offset(value, Utc))
        .ok_or_else(|| format!(
            "expected an RFC 3339 timestamp, YYYY-MM-DDTHH:MM or YYYY-MM-DD: {arg}"
        ))
}

fn vacation(
    id: Option<i64>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Vacation {
    Vacation::new(id, start_date, end_date)
}

fn report_alert<T>(response: &EntityResponse<T>) {
    if let Some(alert) = response.alert() {
        match alert.param {
            Some(param) => log::info!("{}: {param}", alert.message),
            None => log::info!("{}", alert.message),
        }
    }
}

fn print_entity<E: RestEntity>(response: EntityResponse<E>) -> anyhow::Result<()> {
    report_alert(&response);
    match response.into_body() {
        Some(entity) => println!("{}", serde_json::to_string_pretty(&entity.to_wire())?),
        None => println!("null"),
    }
    Ok(())
}

fn print_entities<E: RestEntity>(response: EntityResponse<Vec<E>>) -> anyhow::Result<()> {
    let wires = response.into_body()
        .unwrap_or_default()
        .iter()
        .map(RestEntity::to_wire)
        .collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&wires)?);
    Ok(())
}

async fn run_common<E, S>(service: &S, cmd: EntityCmd) -> anyhow::Result<()>
where
    E: RestEntity,
    S: EntityService<E>,
{
    match cmd {
        EntityCmd::List { page, size, sort, filter } => {
            let mut options = filter.into_iter()
                .fold(RequestOptions::new(), |options, (k, v)| options.param(k, v));
            if let Some(page) = page {
                options = options.page(page);
            }
            if let Some(size) = size {
                options = options.size(size);
            }
            let options = sort.into_iter()
                .fold(options, |options, sort| options.sort(sort));
            print_entities(service.query(options).await?)?;
        }
        EntityCmd::Search { query, page, size, sort } => {
            print_entities(service.search(Search { query, page, size, sort }).await?)?;
        }
        EntityCmd::Get { id } => {
            print_entity(service.find(id).await?)?;
        }
        EntityCmd::Delete { id } => {
            let response = service.delete(id).await?;
            report_alert(&response);
            println!("deleted {} {id}", E::RESOURCE);
        }
    }
    Ok(())
}

async fn parse_vacation(
    service: &impl EntityService<Vacation>,
    cmd: VacationCmd,
) -> anyhow::Result<()> {
    match cmd {
        VacationCmd::Common(cmd) => run_common::<Vacation, _>(service, cmd).await?,
        VacationCmd::Create { start_date, end_date } => {
            print_entity(service.create(vacation(None, start_date, end_date)).await?)?;
        }
        VacationCmd::Update { id, start_date, end_date } => {
            print_entity(service.update(vacation(Some(id), start_date, end_date)).await?)?;
        }
        VacationCmd::Patch { id, start_date, end_date } => {
            print_entity(service.partial_update(vacation(Some(id), start_date, end_date)).await?)?;
        }
    }
    Ok(())
}

async fn parse_country(
    service: &impl EntityService<Country>,
    cmd: CountryCmd,
) -> anyhow::Result<()> {
    match cmd {
        CountryCmd::Common(cmd) => run_common::<Country, _>(service, cmd).await?,
        CountryCmd::Create { country_name } => {
            print_entity(service.create(Country::new(None, country_name)).await?)?;
        }
        CountryCmd::Update { id, country_name } => {
            print_entity(service.update(Country::new(Some(id), country_name)).await?)?;
        }
        CountryCmd::Patch { id, country_name } => {
            print_entity(service.partial_update(Country::new(Some(id), country_name)).await?)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("empcore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = args.platform_builder.build()?;
    match args.command {
        Commands::Vacation { cmd } => parse_vacation(&platform.vacations(), cmd).await?,
        Commands::Country { cmd } => parse_country(&platform.countries(), cmd).await?,
    }
    Ok(())
}
