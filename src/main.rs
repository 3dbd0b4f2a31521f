//! Learning-cost calculator CLI
//!
//! Thin front end over the library: parse the request from flags, run the
//! pipeline, print the result as text or JSON.

use std::path::PathBuf;

use clap::Parser;

use lernkosten::pipeline::{self, CostRequest, CostResult, ImprovementPlan};
use lernkosten::{
    ActionKind, Category, CharClass, EntityKind, Race, Result, RewardVariant, SpellSchool,
    StaticCatalog,
};

#[derive(Parser, Debug)]
#[command(name = "lernkosten")]
#[command(about = "Compute Midgard learning and improvement costs")]
struct Args {
    /// Skill or spell name, e.g. "Menschenkenntnis"
    name: String,

    /// Character class, code or full name ("Hx" or "Hexer")
    #[arg(long)]
    class: String,

    /// Action: learn or improve
    #[arg(long, default_value = "learn")]
    action: String,

    /// Entry kind: skill, spell or weapon
    #[arg(long, default_value = "skill")]
    kind: String,

    /// Current skill level (improvement only)
    #[arg(long, default_value_t = 0)]
    current_level: u8,

    /// Target level; more than one step above current runs a full plan
    #[arg(long)]
    target_level: Option<u8>,

    /// Practice points offered toward cancelling units
    #[arg(long, default_value_t = 0)]
    practice_points: u32,

    /// Gold offered for the gold-for-EP conversion
    #[arg(long, default_value_t = 0)]
    gold: u32,

    /// Reward variant: default, noGold, halveep, halveepnoGold, spruchrolle
    #[arg(long, default_value = "default")]
    reward: String,

    /// Character race
    #[arg(long, default_value = "Mensch")]
    race: String,

    /// Declared school specialization, e.g. "Bewegen"
    #[arg(long)]
    specialization: Option<String>,

    /// Pin resolution to one category instead of scanning all filings
    #[arg(long)]
    category: Option<String>,

    /// Additional catalog TOML file(s) merged over the built-in rulebook
    #[arg(long)]
    catalog: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lernkosten=info")),
        )
        .init();

    let args = Args::parse();

    let mut catalog = StaticCatalog::rulebook();
    for path in &args.catalog {
        catalog.extend_from_path(path)?;
    }

    let mut req = CostRequest::new(
        args.class.parse::<CharClass>()?,
        &args.name,
        args.action.parse::<ActionKind>()?,
        args.kind.parse::<EntityKind>()?,
    );
    req.current_level = args.current_level;
    req.target_level = args.target_level;
    req.practice_points = args.practice_points;
    req.gold_offered = args.gold;
    req.reward = args.reward.parse::<RewardVariant>()?;
    req.race = args.race.parse::<Race>()?;
    req.specialization = args
        .specialization
        .as_deref()
        .map(|s| s.parse::<SpellSchool>())
        .transpose()?;
    req.explicit_category = args
        .category
        .as_deref()
        .map(|s| s.parse::<Category>())
        .transpose()?;

    let multi_step_target = match (req.action, req.target_level) {
        (ActionKind::Improve, Some(t)) if t > req.current_level.saturating_add(1) => Some(t),
        _ => None,
    };

    if let Some(target) = multi_step_target {
        req.target_level = None;
        let plan = pipeline::improvement_plan(&catalog, &req, target)?;
        print_plan(&args, &plan);
    } else {
        let result = pipeline::calculate(&catalog, &req)?;
        print_result(&args, &result);
    }
    Ok(())
}

fn print_result(args: &Args, result: &CostResult) {
    if args.format == "json" {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("serialization failed: {}", e),
        }
        return;
    }
    if let (Some(category), Some(difficulty)) = (result.category, result.difficulty) {
        println!("{} / {}", category, difficulty);
    }
    if let Some(target) = result.target_level {
        println!("target level: {}", target);
    }
    println!("units: {}", result.le);
    println!("EP:    {}", result.ep);
    println!("Gold:  {}", result.gold);
    if result.pp_used > 0 {
        println!("PP used:   {}", result.pp_used);
    }
    if result.gold_used > 0 {
        println!("Gold used for EP: {}", result.gold_used);
    }
}

fn print_plan(args: &Args, plan: &ImprovementPlan) {
    if args.format == "json" {
        match serde_json::to_string_pretty(plan) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("serialization failed: {}", e),
        }
        return;
    }
    for step in &plan.steps {
        if let Some(target) = step.target_level {
            println!(
                "-> {}: {} TE, {} EP, {} Gold (PP {}, Gold used {})",
                target, step.le, step.ep, step.gold, step.pp_used, step.gold_used
            );
        }
    }
    println!("total EP:   {}", plan.total_ep);
    println!("total Gold: {}", plan.total_gold);
    if plan.total_pp_used > 0 {
        println!("total PP used:   {}", plan.total_pp_used);
    }
    if plan.total_gold_used > 0 {
        println!("total Gold used for EP: {}", plan.total_gold_used);
    }
}
