use super::common::*;
use crate::board::domain::{ExperienceLevel, Job, JobId, JobType};
use crate::board::query::{
    filter_jobs, popular, recent, sort_jobs, suggest, DatePosted, JobFilter, JobQuery, Page,
    PageRequest, SearchSession, SortBy,
};

fn ids(jobs: &[Job]) -> Vec<u32> {
    jobs.iter().map(|job| job.id.0).collect()
}

fn run(filter: JobFilter) -> Vec<u32> {
    ids(&filter_jobs(&sample_jobs(), &filter, now()))
}

#[test]
fn empty_filter_returns_everything_in_collection_order() {
    assert_eq!(run(JobFilter::default()), vec![1, 2, 3]);
}

#[test]
fn keywords_match_title_company_description_or_tag() {
    let by_title_or_tag = JobFilter {
        keywords: Some("ENGINEER".to_string()),
        ..JobFilter::default()
    };
    assert_eq!(run(by_title_or_tag), vec![1, 2]);

    let by_company = JobFilter {
        keywords: Some("globex".to_string()),
        ..JobFilter::default()
    };
    assert_eq!(run(by_company), vec![2]);

    let by_description = JobFilter {
        keywords: Some("hospital".to_string()),
        ..JobFilter::default()
    };
    assert_eq!(run(by_description), vec![3]);
}

#[test]
fn blank_text_options_do_not_narrow() {
    let filter = JobFilter {
        keywords: Some(String::new()),
        location: Some(String::new()),
        ..JobFilter::default()
    };
    assert_eq!(run(filter), vec![1, 2, 3]);
}

#[test]
fn location_is_case_insensitive_substring() {
    let filter = JobFilter {
        location: Some("austin".to_string()),
        ..JobFilter::default()
    };
    assert_eq!(run(filter), vec![2]);
}

#[test]
fn salary_bounds_use_range_overlap() {
    let floor = JobFilter {
        salary_min: Some(50_000),
        ..JobFilter::default()
    };
    assert_eq!(run(floor), vec![1, 2], "40k-60k overlaps a 50k floor");

    let ceiling = JobFilter {
        salary_max: Some(45_000),
        ..JobFilter::default()
    };
    assert_eq!(run(ceiling), vec![1, 3], "40k-60k overlaps a 45k ceiling");

    let both = JobFilter {
        salary_min: Some(50_000),
        salary_max: Some(45_000),
        ..JobFilter::default()
    };
    assert_eq!(run(both), vec![1]);
}

#[test]
fn zero_salary_bounds_are_ignored() {
    let filter = JobFilter {
        salary_min: Some(0),
        salary_max: Some(0),
        ..JobFilter::default()
    };
    assert_eq!(run(filter), vec![1, 2, 3]);
}

#[test]
fn date_posted_windows_are_relative_to_now() {
    let week = JobFilter {
        date_posted: Some(DatePosted::Last7Days),
        ..JobFilter::default()
    };
    assert_eq!(run(week), vec![1]);

    let month = JobFilter {
        date_posted: Some(DatePosted::Last30Days),
        ..JobFilter::default()
    };
    assert_eq!(run(month), vec![1, 2]);
}

#[test]
fn unknown_date_window_means_no_restriction() {
    let window: DatePosted = serde_json::from_str("\"90d\"").expect("any string parses");
    assert_eq!(window, DatePosted::AnyTime);

    let filter = JobFilter {
        date_posted: Some(window),
        ..JobFilter::default()
    };
    assert_eq!(run(filter), vec![1, 2, 3]);
}

#[test]
fn options_combine_conjunctively() {
    let filter = JobFilter {
        job_type: vec![JobType::Contract, JobType::FullTime],
        experience_level: vec![ExperienceLevel::Senior],
        remote: Some(true),
        ..JobFilter::default()
    };
    let matched = filter_jobs(&sample_jobs(), &filter, now());
    assert_eq!(ids(&matched), vec![3]);
    for job in &matched {
        assert!(filter.job_type.contains(&job.job_type));
        assert!(filter.experience_level.contains(&job.experience_level));
        assert!(job.remote);
    }

    let on_site = JobFilter {
        remote: Some(false),
        ..JobFilter::default()
    };
    assert_eq!(run(on_site), vec![1]);
}

#[test]
fn date_sort_is_stable_for_equal_timestamps() {
    let posted = days_ago(3);
    let mut jobs: Vec<Job> = (10..13)
        .map(|id| {
            let mut job = job(id, "Engineer", "Acme Corp");
            job.posted_date = posted;
            job
        })
        .collect();
    let mut newest = job(13, "Engineer", "Acme Corp");
    newest.posted_date = days_ago(1);
    jobs.push(newest);

    sort_jobs(&mut jobs, SortBy::Date);
    assert_eq!(ids(&jobs), vec![13, 10, 11, 12]);
}

#[test]
fn sorts_by_salary_company_and_title() {
    let mut jobs = sample_jobs();
    sort_jobs(&mut jobs, SortBy::Salary);
    assert_eq!(ids(&jobs), vec![2, 1, 3]);

    let mut jobs = sample_jobs();
    sort_jobs(&mut jobs, SortBy::Company);
    assert_eq!(ids(&jobs), vec![1, 3, 2], "ties keep collection order");

    let mut jobs = sample_jobs();
    sort_jobs(&mut jobs, SortBy::Title);
    assert_eq!(ids(&jobs), vec![2, 3, 1]);
}

#[test]
fn title_sort_ignores_case() {
    let mut jobs = vec![job(1, "zeta", "A"), job(2, "Alpha", "A"), job(3, "beta", "A")];
    sort_jobs(&mut jobs, SortBy::Title);
    assert_eq!(ids(&jobs), vec![2, 3, 1]);
}

#[test]
fn unknown_sort_key_falls_back_to_date() {
    assert_eq!(SortBy::parse("relevance"), SortBy::Date);
    assert_eq!(SortBy::parse("Salary"), SortBy::Salary);
}

#[test]
fn pages_slice_the_ordered_results() {
    let items: Vec<u32> = (1..=25).collect();

    let third = Page::slice(items.clone(), PageRequest::new(3, 10));
    assert_eq!(third.items, vec![21, 22, 23, 24, 25]);
    assert_eq!(third.total_items, 25);
    assert_eq!(third.total_pages, 3);

    let beyond = Page::slice(items.clone(), PageRequest::new(4, 10));
    assert!(beyond.items.is_empty());

    let zero = Page::slice(items, PageRequest { page: 0, per_page: 10 });
    assert_eq!(zero.page, 1);
    assert_eq!(zero.items.len(), 10);
}

#[test]
fn job_query_filters_sorts_then_pages() {
    let request = JobQuery {
        filter: JobFilter {
            experience_level: vec![ExperienceLevel::Senior, ExperienceLevel::Junior],
            ..JobFilter::default()
        },
        sort_by: SortBy::Salary,
        page: PageRequest::new(1, 2),
    };

    let page = request.run(&sample_jobs(), now());
    assert_eq!(ids(&page.items), vec![2, 1]);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn search_session_resets_page_on_filter_or_sort_change() {
    let mut session = SearchSession::new(1);
    let first = JobQuery {
        filter: session.filter().clone(),
        sort_by: session.sort_by(),
        page: session.page(),
    }
    .run(&sample_jobs(), now());
    session.observe(&first);

    session.go_to(3);
    assert_eq!(session.page().page, 3);
    session.next_page();
    assert_eq!(session.page().page, 3, "clamped to the last page");

    session.set_sort(SortBy::Title);
    assert_eq!(session.page().page, 1);

    session.next_page();
    session.set_filter(JobFilter {
        remote: Some(true),
        ..JobFilter::default()
    });
    assert_eq!(session.page().page, 1);

    session.previous_page();
    assert_eq!(session.page().page, 1);
}

#[test]
fn suggestions_are_distinct_and_require_two_characters() {
    let jobs = sample_jobs();
    assert_eq!(
        suggest(&jobs, "en"),
        vec!["Senior Engineer".to_string(), "engineering".to_string()]
    );
    assert!(suggest(&jobs, "e").is_empty());
    assert!(suggest(&jobs, "").is_empty());
}

#[test]
fn suggestions_are_capped() {
    let jobs: Vec<Job> = (1..=12)
        .map(|id| job(id, &format!("Platform Role {id}"), "Acme Corp"))
        .collect();
    let suggestions = suggest(&jobs, "role");
    assert_eq!(suggestions.len(), 8);
    assert_eq!(suggestions[0], "Platform Role 1");
}

#[test]
fn popular_and_recent_listings() {
    let jobs = sample_jobs();
    assert_eq!(ids(&popular(&jobs, 2)), vec![2, 1]);
    assert_eq!(ids(&recent(&jobs, 5)), vec![1, 2, 3]);
}

#[test]
fn active_filter_count_and_reset() {
    let mut filter = JobFilter {
        keywords: Some("rust".to_string()),
        location: Some("Remote".to_string()),
        job_type: vec![JobType::FullTime, JobType::Contract],
        salary_min: Some(80_000),
        salary_max: Some(120_000),
        remote: Some(true),
        ..JobFilter::default()
    };
    assert_eq!(filter.active_count(), 5);

    filter.clear_keeping_keywords();
    assert_eq!(filter.active_count(), 0);
    assert_eq!(filter.keywords.as_deref(), Some("rust"));
}

#[test]
fn legacy_records_decode_with_capitalised_id() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "Id": 7,
        "title": "Engineer",
        "company": "Acme Corp",
        "location": "Remote",
        "type": "Part-time",
        "experienceLevel": "Junior",
        "salary": { "min": 20, "max": 30 },
        "remote": true,
        "description": "Part-time support.",
        "postedDate": "2026-10-01T00:00:00Z",
        "applicationDeadline": "2026-11-01T00:00:00Z"
    }))
    .expect("legacy record decodes");
    assert_eq!(job.id, JobId(7));
    assert!(job.tags.is_empty());

    let encoded = serde_json::to_value(&job).expect("encode");
    assert_eq!(encoded["id"], 7);
    assert_eq!(encoded["type"], "Part-time");
}
