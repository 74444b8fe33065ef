// Query and decoding benchmarks
// Author: Gabriel Demetrios Lafis

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_analytics_client::{compile_filter, decode_report, ReportQuery};

fn report_feed(rows: usize) -> String {
    let mut body = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/"
      xmlns:dxp="http://schemas.google.com/analytics/2009">
  <updated>2011-02-01T10:00:00.000-08:00</updated>
  <generator version="1.0">Google Analytics</generator>
  <openSearch:totalResults>1000</openSearch:totalResults>
  <dxp:startDate>2011-01-01</dxp:startDate>
  <dxp:endDate>2011-01-31</dxp:endDate>
  <dxp:aggregates>
    <dxp:metric name="ga:pageviews" type="integer" value="123456"/>
  </dxp:aggregates>
"#,
    );

    for i in 0..rows {
        body.push_str(&format!(
            r#"  <entry>
    <dxp:dimension name="ga:browser" value="Browser {i}"/>
    <dxp:dimension name="ga:browserVersion" value="{i}.0"/>
    <dxp:metric name="ga:pageviews" type="integer" value="{i}"/>
    <dxp:metric name="ga:avgTimeOnPage" type="time" value="{i}.25"/>
  </entry>
"#
        ));
    }

    body.push_str("</feed>\n");
    body
}

fn bench_compile_filter(c: &mut Criterion) {
    let raw = "country == 'United States' && browser =~ ^Fire || visits >= 10 && city != Boston";

    c.bench_function("compile_filter", |b| {
        b.iter(|| compile_filter(black_box(raw)))
    });
}

fn bench_build_query(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2011, 1, 31).expect("valid date");

    c.bench_function("build_report_query", |b| {
        b.iter(|| {
            ReportQuery::builder(black_box("12345"))
                .dimensions(["browser", "browserVersion"])
                .metrics(["pageviews", "visits"])
                .sort(["-visits", "pageviews"])
                .filter("browser == Firefox && visits > 5")
                .build_on(today)
                .map(|query| query.to_parameters(false))
        })
    });
}

fn bench_decode_report(c: &mut Criterion) {
    let body = report_feed(1000);

    c.bench_function("decode_report_1000_rows", |b| {
        b.iter(|| decode_report(black_box(&body)))
    });
}

criterion_group!(benches, bench_compile_filter, bench_build_query, bench_decode_report);
criterion_main!(benches);
