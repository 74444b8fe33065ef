// Shared fixtures for integration tests
// Author: Gabriel Demetrios Lafis

#![allow(dead_code)]

use mockall::mock;
use rust_analytics_client::transport::{HttpRequest, HttpResponse, Transport, TransportError};

mock! {
    pub Service {}

    impl Transport for Service {
        fn request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
    }
}

/// Report feed with two rows, aggregates and data source properties
pub const REPORT_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:openSearch="http://a9.com/-/spec/opensearchrss/1.0/"
      xmlns:dxp="http://schemas.google.com/analytics/2009">
  <id>http://www.google.com/analytics/feeds/data?ids=ga:12345</id>
  <updated>2011-02-01T02:39:11.000-08:00</updated>
  <title type="text">Google Analytics Data for Profile 12345</title>
  <generator version="1.0">Google Analytics</generator>
  <openSearch:totalResults>2</openSearch:totalResults>
  <openSearch:startIndex>1</openSearch:startIndex>
  <openSearch:itemsPerPage>30</openSearch:itemsPerPage>
  <dxp:aggregates>
    <dxp:metric confidenceInterval="0.0" name="ga:pageviews" type="integer" value="1500"/>
    <dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="700"/>
  </dxp:aggregates>
  <dxp:dataSource>
    <dxp:property name="ga:profileId" value="12345"/>
    <dxp:property name="ga:webPropertyId" value="UA-12345-1"/>
    <dxp:property name="ga:accountName" value="Example"/>
    <dxp:tableId>ga:12345</dxp:tableId>
    <dxp:tableName>www.example.com</dxp:tableName>
  </dxp:dataSource>
  <dxp:endDate>2011-01-31</dxp:endDate>
  <dxp:startDate>2011-01-01</dxp:startDate>
  <entry>
    <id>http://www.google.com/analytics/feeds/data?ids=ga:12345&amp;ga:browser=Firefox</id>
    <updated>2011-01-30T16:00:00.001-08:00</updated>
    <title type="text">ga:browser=Firefox | ga:browserVersion=3.6</title>
    <dxp:dimension name="ga:browser" value="Firefox"/>
    <dxp:dimension name="ga:browserVersion" value="3.6"/>
    <dxp:metric confidenceInterval="0.0" name="ga:pageviews" type="integer" value="1000"/>
    <dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="500"/>
  </entry>
  <entry>
    <id>http://www.google.com/analytics/feeds/data?ids=ga:12345&amp;ga:browser=Chrome</id>
    <updated>2011-01-30T16:00:00.001-08:00</updated>
    <title type="text">ga:browser=Chrome | ga:browserVersion=9.0</title>
    <dxp:dimension name="ga:browser" value="Chrome"/>
    <dxp:dimension name="ga:browserVersion" value="9.0"/>
    <dxp:metric confidenceInterval="0.0" name="ga:pageviews" type="integer" value="500"/>
    <dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="200"/>
  </entry>
</feed>
"#;

/// Report feed without any rows
pub const EMPTY_REPORT_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/"
      xmlns:dxp="http://schemas.google.com/analytics/2009">
  <updated>2011-02-01T02:39:11.000-08:00</updated>
  <generator version="1.0">Google Analytics</generator>
  <openSearch:totalResults>0</openSearch:totalResults>
  <dxp:aggregates>
    <dxp:metric name="ga:pageviews" type="integer" value="0"/>
  </dxp:aggregates>
  <dxp:endDate>2011-01-31</dxp:endDate>
  <dxp:startDate>2011-01-01</dxp:startDate>
</feed>
"#;

/// Account listing with one titled and one untitled entry
pub const ACCOUNT_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/"
      xmlns:dxp="http://schemas.google.com/analytics/2009">
  <updated>2011-02-01T00:00:00.000-08:00</updated>
  <generator version="1.0">Google Analytics</generator>
  <openSearch:totalResults>2</openSearch:totalResults>
  <openSearch:startIndex>1</openSearch:startIndex>
  <openSearch:itemsPerPage>30</openSearch:itemsPerPage>
  <entry>
    <updated>2010-12-01T00:00:00.000-08:00</updated>
    <title type="text">www.example.com</title>
    <dxp:property name="ga:accountId" value="1"/>
    <dxp:property name="ga:profileId" value="12345"/>
    <dxp:property name="ga:currency" value="USD"/>
  </entry>
  <entry>
    <dxp:property name="ga:accountId" value="2"/>
    <dxp:property name="ga:profileId" value="67890"/>
  </entry>
</feed>
"#;
