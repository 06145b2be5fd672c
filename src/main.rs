use clap::Parser;
use std::path::PathBuf;

use campusfeed::{
    FeedController, FeedDb, FilterSelection, NewProfile, NewProject, TracingNotifier,
};

#[derive(Parser)]
#[command(name = "campusfeed")]
#[command(about = "Browse campus collaboration projects from a feed store")]
struct Cli {
    /// Path to the feed store database
    #[arg(value_name = "STORE")]
    store_path: PathBuf,

    /// Only fetch women-led projects (server-side constraint)
    #[arg(long)]
    women_led: bool,

    /// Client-side search over title, description and skills
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Restrict the feed to the signed-in user's college
    #[arg(long)]
    my_college: bool,

    /// Act as this signed-in user id
    #[arg(short, long, value_name = "USER_ID")]
    user: Option<String>,

    /// Insert a small demo data set before browsing
    #[arg(long)]
    seed_demo: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let db = FeedDb::new(&args.store_path).await?;
    if args.seed_demo {
        seed_demo(&db).await?;
        println!("Seeded demo data (profiles: aisha, marco)\n");
    }

    let mut feed = FeedController::new(db.clone(), TracingNotifier);

    // A failed profile read is not fatal; the my-college toggle just stays
    // inert.
    if let Err(error) = feed.session_changed(args.user.as_deref()).await {
        eprintln!("Warning: {error}");
    }
    feed.set_my_college_only(args.my_college);
    if let Some(term) = args.search {
        feed.set_search_term(term);
    }

    if args.women_led {
        feed.set_filter(FilterSelection::WomenLed).await?;
    } else {
        feed.reload().await?;
    }

    let visible = feed.visible();
    println!("{} project(s)", visible.len());
    for project in visible {
        println!();
        println!("{}  ->  {}", project.title, project.detail_path());
        if project.is_women_led {
            println!("  [women-led]");
        }
        if let Some(college) = &project.college {
            println!("  college: {college}");
        }
        println!(
            "  by {} | team {} | {} | {} applicant(s)",
            project.creator_name, project.team_size, project.duration, project.applicants
        );
        if !project.skills.is_empty() {
            println!("  skills: {}", project.skills.join(", "));
        }
        println!("  {}", project.description);
    }

    db.close().await?;
    Ok(())
}

async fn seed_demo(db: &FeedDb) -> anyhow::Result<()> {
    db.add_profile(&NewProfile {
        id: "aisha".to_string(),
        name: "Aisha Khan".to_string(),
        college: Some("Engineering".to_string()),
    })
    .await?;
    db.add_profile(&NewProfile {
        id: "marco".to_string(),
        name: "Marco Silva".to_string(),
        college: None,
    })
    .await?;

    db.add_project(&NewProject {
        title: "Campus Ride Share".to_string(),
        description: "Match students commuting from the same neighborhoods".to_string(),
        skills: vec!["Flutter".to_string(), "Firebase".to_string()],
        team_size: "3-4".to_string(),
        duration: "3 months".to_string(),
        is_women_led: false,
        creator_name: "Marco Silva".to_string(),
        creator_id: "marco".to_string(),
        college: Some("Business".to_string()),
        applicants: 4,
    })
    .await?;
    db.add_project(&NewProject {
        title: "Solar Telemetry Dashboard".to_string(),
        description: "Live dashboard for the rooftop solar array".to_string(),
        skills: vec!["Rust".to_string(), "Grafana".to_string()],
        team_size: "2-3".to_string(),
        duration: "2 months".to_string(),
        is_women_led: true,
        creator_name: "Aisha Khan".to_string(),
        creator_id: "aisha".to_string(),
        college: Some("Engineering".to_string()),
        applicants: 7,
    })
    .await?;
    db.add_project(&NewProject {
        title: "Debate Club Archive".to_string(),
        description: "Searchable archive of recorded debate sessions".to_string(),
        skills: vec!["Python".to_string(), "Whisper".to_string()],
        team_size: "2".to_string(),
        duration: "1 month".to_string(),
        is_women_led: true,
        creator_name: "Priya Nair".to_string(),
        creator_id: "priya".to_string(),
        college: Some("Arts".to_string()),
        applicants: 2,
    })
    .await?;
    Ok(())
}
