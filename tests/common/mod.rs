// tests/common/mod.rs
#![allow(dead_code)]

use job_skills::JobRecord;

/// Listing page shaped like the live site: cards inside `#ResultsContainer`.
pub fn listing_page(cards: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::new();
    for (title, company, location, date) in cards {
        body.push_str(&format!(
            r#"
        <div class="column is-half">
          <div class="card">
            <div class="card-content">
              <div class="media">
                <div class="media-content">
                  <h2 class="title is-5">{title}</h2>
                  <h3 class="subtitle is-6 company">{company}</h3>
                </div>
              </div>
              <div class="content">
                <p class="location">
                  {location}
                </p>
                <p class="is-small has-text-grey">
                  <time datetime="{date}">{date}</time>
                </p>
              </div>
            </div>
          </div>
        </div>"#
        ));
    }
    format!(
        r#"<!DOCTYPE html><html><head><title>Fake Python</title></head>
        <body><section class="section"><div class="container">
        <div id="ResultsContainer" class="columns is-multiline">{body}</div>
        </div></section></body></html>"#
    )
}

pub fn record(title: &str, location: &str) -> JobRecord {
    let skills = job_skills::specs::skills::extract_skills(Some(title));
    JobRecord::new(title.into(), "Acme".into(), location.into(), "2021-04-08".into(), skills)
}
