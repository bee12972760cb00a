use crate::cli::DataArgs;
use crate::infra::{load_board, load_config};
use clap::Args;
use job_board::board::{
    CompanyView, DatePosted, ExperienceLevel, Job, JobFilter, JobQuery, JobType, Page,
    PageRequest, SortBy,
};
use job_board::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Match against title, company, description and tags
    #[arg(long, short)]
    pub(crate) keywords: Option<String>,
    /// Case-insensitive location substring
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Employment types, comma separated (Full-time, Part-time, Contract)
    #[arg(long, value_delimiter = ',', value_parser = parse_job_type)]
    pub(crate) job_type: Vec<JobType>,
    /// Seniority, comma separated (Junior, Mid-level, Senior)
    #[arg(long, value_delimiter = ',', value_parser = parse_experience)]
    pub(crate) experience_level: Vec<ExperienceLevel>,
    #[arg(long)]
    pub(crate) salary_min: Option<u32>,
    #[arg(long)]
    pub(crate) salary_max: Option<u32>,
    /// Only remote (true) or only on-site (false) roles
    #[arg(long)]
    pub(crate) remote: Option<bool>,
    /// 24h, 3d, 7d, 30d or any
    #[arg(long, value_parser = parse_date_posted)]
    pub(crate) date_posted: Option<DatePosted>,
    /// date, salary, company or title
    #[arg(long, value_parser = parse_sort, default_value = "date")]
    pub(crate) sort: SortBy,
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Defaults to the configured page size
    #[arg(long)]
    pub(crate) per_page: Option<usize>,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Partial text; at least two characters
    pub(crate) query: String,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CompaniesArgs {
    /// Filter by name, location, description or industry
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

fn parse_job_type(raw: &str) -> Result<JobType, String> {
    JobType::parse(raw).ok_or_else(|| format!("unknown job type '{raw}'"))
}

fn parse_experience(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::parse(raw).ok_or_else(|| format!("unknown experience level '{raw}'"))
}

fn parse_date_posted(raw: &str) -> Result<DatePosted, String> {
    Ok(DatePosted::parse(raw))
}

fn parse_sort(raw: &str) -> Result<SortBy, String> {
    Ok(SortBy::parse(raw))
}

impl SearchArgs {
    fn into_query(self, default_page_size: usize) -> JobQuery {
        JobQuery {
            filter: JobFilter {
                keywords: self.keywords,
                location: self.location,
                job_type: self.job_type,
                experience_level: self.experience_level,
                salary_min: self.salary_min,
                salary_max: self.salary_max,
                remote: self.remote,
                date_posted: self.date_posted,
            },
            sort_by: self.sort,
            page: PageRequest::new(self.page, self.per_page.unwrap_or(default_page_size)),
        }
    }
}

pub(crate) fn run_job_search(args: SearchArgs) -> Result<(), AppError> {
    let config = load_config(&args.data)?;
    let board = load_board(&config.board)?;
    let query = args.into_query(board.page_size());

    let page = board.search(&query);
    print!(
        "{}",
        render_job_page(&page, query.sort_by, query.filter.active_count())
    );
    Ok(())
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let config = load_config(&args.data)?;
    let board = load_board(&config.board)?;

    let suggestions = board.suggestions(&args.query);
    if suggestions.is_empty() {
        println!("No suggestions for '{}'", args.query.trim());
    }
    for suggestion in suggestions {
        println!("{suggestion}");
    }
    Ok(())
}

pub(crate) fn run_companies(args: CompaniesArgs) -> Result<(), AppError> {
    let config = load_config(&args.data)?;
    let board = load_board(&config.board)?;

    let companies = board.search_companies(args.query.as_deref().unwrap_or_default());
    print!("{}", render_companies(&companies));
    Ok(())
}

fn render_job_page(page: &Page<Job>, sort_by: SortBy, active_filters: usize) -> String {
    let mut out = format!(
        "{} jobs found | sorted by {} | {} active filters\n",
        page.total_items,
        sort_by.label(),
        active_filters
    );
    if page.items.is_empty() {
        out.push_str("No jobs match the current filters.\n");
        return out;
    }

    for job in &page.items {
        let remote = if job.remote { " (remote)" } else { "" };
        out.push_str(&format!(
            "#{} {} | {} | {}{} | {} | {} | {}\n",
            job.id,
            job.title,
            job.company,
            job.location,
            remote,
            job.job_type.label(),
            job.experience_level.label(),
            job.salary.label()
        ));
    }
    out.push_str(&format!(
        "Page {} of {}\n",
        page.page,
        page.total_pages.max(1)
    ));
    out
}

fn render_companies(companies: &[CompanyView]) -> String {
    if companies.is_empty() {
        return "No companies match.\n".to_string();
    }

    companies
        .iter()
        .map(|view| {
            format!(
                "#{} {} | {} | {} | {} | {} open positions\n",
                view.company.id,
                view.company.name,
                view.company.location,
                view.company.size.label(),
                view.company.industry.join(", "),
                view.open_positions
            )
        })
        .collect()
}
