use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use saju_base::{
    Gender, Pillar, Stem, annual_pillars, monthly_pillars, ten_god_for_chars,
    twelve_stage_for_chars,
};
use saju_chart::{
    BirthInput, Chart, ChartConfig, MonthFallback, compute_chart, daily_outlook,
    day_pillar_of_date, month_pillar_for_instant,
};
use saju_config::SajuConfig;
use saju_time::{
    ALL_REGIONS, ALL_SOLAR_TERMS, CivilTime, Region, SolarTermTable, correct_to_local_mean,
};

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar (saju) calculator")]
struct Cli {
    /// Config file (JSON); defaults to $SAJU_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Solar term table replacing the configured one
    #[arg(long, global = true)]
    terms: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full four-pillar chart of a birth
    Chart {
        /// Civil birth time (YYYY-MM-DD hh:mm, or YYYY-MM-DD with --unknown-hour)
        date: String,
        /// male | female
        #[arg(long)]
        gender: String,
        /// Region name or minute offset (default from config, else Seoul)
        #[arg(long)]
        region: Option<String>,
        /// Birth hour unknown: no hour pillar
        #[arg(long)]
        unknown_hour: bool,
        /// Keep the civil date for 23:30-23:59 births
        #[arg(long)]
        night_bucket: bool,
        /// Month fallback policy: strict | last-bucket
        #[arg(long)]
        fallback: Option<String>,
        /// Highlight the decade active at this age
        #[arg(long)]
        age: Option<u32>,
        /// Daily outlook for this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// Day pillar of a civil date (no 23:00 roll)
    Day {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
    /// Month pillar and its solar-term interval
    Month {
        /// Civil time (YYYY-MM-DD hh:mm)
        date: String,
        /// Region name or minute offset
        #[arg(long)]
        region: Option<String>,
    },
    /// Ten-god of a stem or branch relative to a day stem
    TenGod {
        /// Day stem character (e.g. 甲)
        day_stem: char,
        /// Target stem or branch character
        target: char,
    },
    /// Twelve-stage of a branch relative to a stem
    TwelveStage {
        /// Reference stem character
        stem: char,
        /// Target branch character
        branch: char,
    },
    /// Annual luck pillars
    Annual {
        /// Day stem (hanja, name or Korean)
        #[arg(long)]
        day_stem: String,
        /// First year
        #[arg(long)]
        from: i32,
        /// Number of years
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// The twelve monthly luck pillars of a sexagenary year
    Monthly {
        /// Day stem (hanja, name or Korean)
        #[arg(long)]
        day_stem: String,
        /// Sexagenary year
        #[arg(long)]
        year: i32,
    },
    /// Decade luck pillars of a birth
    Decade {
        /// Civil birth time (YYYY-MM-DD hh:mm)
        date: String,
        /// male | female
        #[arg(long)]
        gender: String,
        /// Region name or minute offset
        #[arg(long)]
        region: Option<String>,
        /// Birth hour unknown
        #[arg(long)]
        unknown_hour: bool,
    },
    /// The 24 solar terms of a year
    Terms {
        /// Civil year
        year: i32,
    },
    /// Built-in regions and their offsets
    Regions,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("saju=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_config(cli: &Cli) -> SajuConfig {
    let mut config = SajuConfig::load(cli.config.as_deref())
        .unwrap_or_else(|e| fail(format!("Failed to load config: {e}")));
    if let Some(terms) = &cli.terms {
        config.solar_terms = Some(terms.clone());
    }
    tracing::debug!(?config, "config resolved");
    config
}

fn load_table(config: &SajuConfig) -> SolarTermTable {
    config
        .load_table()
        .unwrap_or_else(|e| fail(format!("Failed to load solar term table: {e}")))
}

fn parse_civil(s: &str) -> CivilTime {
    s.parse()
        .unwrap_or_else(|e| fail(format!("Invalid date '{s}': {e}")))
}

fn parse_date(s: &str) -> NaiveDate {
    parse_civil(s)
        .to_date()
        .unwrap_or_else(|e| fail(format!("Invalid date '{s}': {e}")))
}

fn require_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        fail("Valid: male, female")
    })
}

fn require_stem(s: &str) -> Stem {
    s.parse()
        .unwrap_or_else(|e| fail(format!("Invalid day stem '{s}': {e}")))
}

fn require_region(arg: Option<&str>, config: &SajuConfig) -> Region {
    match arg {
        Some(s) => s.parse().unwrap_or_else(|e| {
            eprintln!("{e}");
            let names: Vec<&str> = ALL_REGIONS.iter().map(|r| r.name()).collect();
            fail(format!("Valid: {}, or a minute offset", names.join(", ")))
        }),
        None => config
            .default_region()
            .unwrap_or_else(|e| fail(format!("Invalid config: {e}"))),
    }
}

fn chart_config(
    config: &SajuConfig,
    night_bucket: bool,
    fallback: Option<&str>,
) -> ChartConfig {
    let mut chart = config.to_chart_config();
    chart.night_bucket |= night_bucket;
    if let Some(name) = fallback {
        chart.month_fallback = MonthFallback::from_name(name)
            .unwrap_or_else(|| fail(format!("Invalid fallback: {name}. Use strict or last-bucket.")));
    }
    chart
}

fn birth_input(date: &str, gender: &str, region: Region, unknown_hour: bool) -> BirthInput {
    let input = BirthInput::new(parse_civil(date), require_gender(gender), region);
    if unknown_hour {
        input.with_unknown_hour()
    } else {
        input
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("JSON encoding failed: {e}")),
    }
}

fn pillar_line(p: &Pillar) -> String {
    let stem_god = match p.stem.ten_god {
        Some(g) => g.name(),
        None => "DayMaster",
    };
    let hidden: Vec<String> = p
        .branch
        .hidden_stems
        .iter()
        .map(|h| format!("{}:{}", h.stem, h.ten_god.name()))
        .collect();
    format!(
        "{:<7} {} {}  {}/{}  {} / {}  stage {}  hidden [{}]",
        p.label.name(),
        p.label.hanja(),
        p.stem_branch,
        p.stem.element.name(),
        p.branch.element.name(),
        stem_god,
        p.branch.ten_god.name(),
        p.branch.twelve_stage.name(),
        hidden.join(", ")
    )
}

fn print_chart(chart: &Chart, age: Option<u32>) {
    if let Some(birth) = &chart.birth {
        println!(
            "Birth: {} ({}, {:+} min) -> local mean {}",
            birth.civil,
            birth.region.name(),
            -birth.offset_minutes,
            birth.corrected.format("%Y-%m-%d %H:%M")
        );
    }
    for p in chart.pillars() {
        let marks: Vec<_> = chart.symbolic_stars(p).iter().map(|s| s.korean()).collect();
        println!("{}  {}", pillar_line(p), marks.join(" "));
    }
    if chart.hour.is_none() {
        println!("hour    時柱 (unknown)");
    }
    if chart.month_info.as_ref().is_some_and(|i| i.is_fallback()) {
        println!("Warning: month pillar resolved by fallback");
    }
    let tally = chart.element_tally();
    println!(
        "Elements: wood {} fire {} earth {} metal {} water {}",
        tally.wood, tally.fire, tally.earth, tally.metal, tally.water
    );
    println!(
        "Luck: {} from age {}",
        chart.direction.name(),
        chart.start_age
    );
    for d in &chart.decade_pillars {
        let current = age.is_some_and(|a| d.contains_age(a));
        println!(
            "  {}{:>3}  {}",
            if current { '*' } else { ' ' },
            d.age,
            d.pillar.stem_branch
        );
    }
}

fn main() {
    let _ = dotenvy::dotenv();
    init_logging();
    let cli = Cli::parse();
    let config = load_config(&cli);

    match &cli.command {
        Commands::Chart {
            date,
            gender,
            region,
            unknown_hour,
            night_bucket,
            fallback,
            age,
            on,
        } => {
            let table = load_table(&config);
            let region = require_region(region.as_deref(), &config);
            let input = birth_input(date, gender, region, *unknown_hour);
            let options = chart_config(&config, *night_bucket, fallback.as_deref());
            let chart = compute_chart(&table, &input, &options)
                .unwrap_or_else(|e| fail(format!("Chart failed: {e}")));
            let outlook = on.as_deref().map(|d| daily_outlook(&chart, parse_date(d)));
            if cli.json {
                print_json(&serde_json::json!({ "chart": chart, "outlook": outlook }));
                return;
            }
            print_chart(&chart, *age);
            if let Some(o) = outlook {
                println!(
                    "Outlook {}: {} stage {}{}",
                    o.date,
                    o.pillar.stem_branch,
                    o.twelve_stage.name(),
                    if o.nobleman { " nobleman" } else { "" }
                );
                println!(
                    "  month {} ({})",
                    o.month_ten_god.name(),
                    if o.month_support { "supports" } else { "drains" }
                );
            }
        }

        Commands::Day { date } => {
            let sb = day_pillar_of_date(parse_date(date));
            if cli.json {
                print_json(&sb);
            } else {
                println!("{} ({}) index {}", sb, sb.korean(), sb.index());
            }
        }

        Commands::Month { date, region } => {
            let table = load_table(&config);
            let region = require_region(region.as_deref(), &config);
            let civil = parse_civil(date)
                .to_datetime()
                .unwrap_or_else(|e| fail(e));
            let corrected = correct_to_local_mean(civil, region.offset_minutes());
            let fallback = config.month_fallback();
            let info = month_pillar_for_instant(&table, corrected, fallback)
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&info);
                return;
            }
            let end = info
                .end
                .map_or_else(|| "open".to_string(), |e| e.format("%Y-%m-%d %H:%M").to_string());
            println!(
                "{} (year {}, position {}) {} .. {}{}",
                info.stem_branch,
                info.sexagenary_year,
                info.position,
                info.start.format("%Y-%m-%d %H:%M"),
                end,
                if info.is_fallback() { " [fallback]" } else { "" }
            );
        }

        Commands::TenGod { day_stem, target } => {
            let god = ten_god_for_chars(*day_stem, *target).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&god);
            } else {
                println!("{} ({} {})", god.name(), god.hanja(), god.korean());
            }
        }

        Commands::TwelveStage { stem, branch } => {
            let stage = twelve_stage_for_chars(*stem, *branch).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&stage);
            } else {
                println!("{} ({} {})", stage.name(), stage.hanja(), stage.korean());
            }
        }

        Commands::Annual {
            day_stem,
            from,
            count,
        } => {
            let pillars = annual_pillars(*from, *count, require_stem(day_stem));
            if cli.json {
                print_json(&pillars);
                return;
            }
            for a in &pillars {
                println!("{}  {}", a.year, pillar_line(&a.pillar));
            }
        }

        Commands::Monthly { day_stem, year } => {
            let pillars = monthly_pillars(*year, require_stem(day_stem));
            if cli.json {
                print_json(&pillars);
                return;
            }
            for m in &pillars {
                println!(
                    "{} {:04}-{:02}  {}",
                    m.month_name(),
                    m.civil_year,
                    m.civil_month,
                    pillar_line(&m.pillar)
                );
            }
        }

        Commands::Decade {
            date,
            gender,
            region,
            unknown_hour,
        } => {
            let table = load_table(&config);
            let region = require_region(region.as_deref(), &config);
            let input = birth_input(date, gender, region, *unknown_hour);
            let options = chart_config(&config, false, None);
            let chart = compute_chart(&table, &input, &options)
                .unwrap_or_else(|e| fail(format!("Chart failed: {e}")));
            if cli.json {
                print_json(&chart.decade_pillars);
                return;
            }
            println!(
                "{} from age {} (month pillar {})",
                chart.direction.name(),
                chart.start_age,
                chart.month.stem_branch
            );
            for d in &chart.decade_pillars {
                println!("{:>3}  {}", d.age, pillar_line(&d.pillar));
            }
        }

        Commands::Terms { year } => {
            let table = load_table(&config);
            let terms = table.year_terms(*year).unwrap_or_else(|e| fail(e));
            if cli.json {
                let rows: Vec<_> = ALL_SOLAR_TERMS
                    .iter()
                    .zip(terms)
                    .map(|(t, at)| serde_json::json!({ "term": t, "at": at }))
                    .collect();
                print_json(&rows);
                return;
            }
            for (t, at) in ALL_SOLAR_TERMS.iter().zip(terms) {
                println!(
                    "{:>2} {:<20} {} {:>3}°  {}",
                    t.index(),
                    t.name(),
                    t.hanja(),
                    t.solar_longitude_deg(),
                    at.format("%Y-%m-%d %H:%M")
                );
            }
        }

        Commands::Regions => {
            if cli.json {
                let rows: Vec<_> = ALL_REGIONS
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "region": r.name(),
                            "offset_minutes": r.offset_minutes(),
                        })
                    })
                    .collect();
                print_json(&rows);
                return;
            }
            for r in &ALL_REGIONS {
                println!("{:<10} {:>3} min", r.name(), r.offset_minutes());
            }
        }
    }
}
