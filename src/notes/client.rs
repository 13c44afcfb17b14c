use std::time::Duration;
use log::{error, info};
use ureq::Agent;
use ureq::http::{HeaderMap, StatusCode};
use crate::error::NotesError;
use super::query::NotesQuery;

// Blocking client for the notes API. We only ever
// do a single GET so there's no point in going async.
// Proxy settings (HTTP_PROXY and friends) are picked
// up from the environment by ureq itself.
pub struct NotesClient {
  agent: Agent,
  base_url: String,
  max_body_bytes: u64
}

impl NotesClient {

  pub fn new(base_url: &str, timeout: Duration, max_body_bytes: u64) -> Self {
    // We check the status ourselves because anything
    // that isn't exactly 200 is an error for us, not
    // only 4xx and 5xx.
    let config = Agent::config_builder()
      .timeout_global(Some(timeout))
      .http_status_as_error(false)
      .build();
    let agent: Agent = config.into();
    NotesClient {
      agent,
      base_url: base_url.to_string(),
      max_body_bytes
    }
  }

  pub fn url_for(&self, query: &NotesQuery) -> String {
    query.to_url(&self.base_url)
  }

  // Returns the raw response body. With dump set the
  // whole response gets printed to the console first.
  pub fn fetch(
    &self,
    query: &NotesQuery,
    dump: bool
  ) -> Result<Vec<u8>, NotesError> {
    let url = self.url_for(query);
    let mut response = self.agent.get(&url)
      .call()
      .map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        NotesError::Network {
          url: url.clone(),
          cause: e.to_string()
        }
      })?;

    let status = response.status();
    info!("Notes API answered with status {}", status);
    check_status(status)?;

    let version = response.version();
    let headers = response.headers().clone();
    let body = response.body_mut()
      .with_config()
      .limit(self.max_body_bytes)
      .read_to_vec()
      .map_err(|e| NotesError::Body(e.to_string()))?;
    info!("Received {} bytes", body.len());

    if dump {
      let status_line = format!("{:?} {}", version, status);
      println!(
        "\nResponse dump (body = true) ...\n{}\n",
        response_dump(&status_line, &headers, &body)
      );
    }
    Ok(body)
  }

}

pub fn check_status(status: StatusCode) -> Result<(), NotesError> {
  if status == StatusCode::OK {
    Ok(())
  } else {
    Err(NotesError::HttpStatus(status.to_string()))
  }
}

fn response_dump(status_line: &str, headers: &HeaderMap, body: &[u8]) -> String {
  let mut dump = String::from(status_line);
  dump.push_str("\r\n");
  for (name, value) in headers.iter() {
    dump.push_str(&format!(
      "{}: {}\r\n",
      name,
      value.to_str().unwrap_or("<binary>")
    ));
  }
  dump.push_str("\r\n");
  dump.push_str(&String::from_utf8_lossy(body));
  dump
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::{Read, Write};
  use std::net::TcpListener;
  use std::sync::mpsc::{self, Receiver};
  use std::thread;

  // Serves exactly one canned response and returns the
  // base URL to hit.
  fn serve_once(response: String) -> String {
    serve_once_recording(response).0
  }

  // Same, but the request line the server got comes
  // back through the receiver.
  fn serve_once_recording(response: String) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
      let (mut stream, _) = listener.accept().unwrap();
      let mut request = Vec::new();
      let mut buf = [0u8; 1024];
      while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
          break;
        }
        request.extend_from_slice(&buf[..n]);
      }
      let head = String::from_utf8_lossy(&request);
      let request_line = head.lines().next().unwrap_or("").to_string();
      tx.send(request_line).ok();
      stream.write_all(response.as_bytes()).unwrap();
      stream.flush().unwrap();
    });
    (format!("http://{}/api/0.6/notes.json", addr), rx)
  }

  fn http_response(status_line: &str, body: &str) -> String {
    format!(
      "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
      status_line,
      body.len(),
      body
    )
  }

  fn client(base_url: &str) -> NotesClient {
    NotesClient::new(base_url, Duration::from_secs(5), 1024 * 1024)
  }

  #[test]
  fn fetch_returns_body_on_200() {
    let body = r#"{"type":"FeatureCollection","features":[]}"#;
    let url = serve_once(http_response("200 OK", body));
    let query = NotesQuery::new("1,2,3,4", 5, false);
    let result = client(&url).fetch(&query, false).unwrap();
    assert_eq!(body.as_bytes(), &result[..]);
  }

  #[test]
  fn other_2xx_status_is_an_error() {
    let url = serve_once(http_response("202 Accepted", ""));
    let query = NotesQuery::new("1,2,3,4", 5, false);
    match client(&url).fetch(&query, false) {
      Err(NotesError::HttpStatus(status)) => assert_eq!("202 Accepted", status),
      other => panic!("Expected HttpStatus error, got {:?}", other)
    }
  }

  #[test]
  fn bad_request_is_an_error() {
    let url = serve_once(http_response("400 Bad Request", "The parameter bbox is required"));
    let query = NotesQuery::new("", 5, false);
    let result = client(&url).fetch(&query, false);
    assert!(matches!(result, Err(NotesError::HttpStatus(_))));
  }

  #[test]
  fn malformed_bbox_reaches_the_api() {
    let (url, requests) = serve_once_recording(
      http_response("400 Bad Request", "The parameter bbox must be of the form min_lon,min_lat,max_lon,max_lat")
    );
    let query = NotesQuery::new("1, 2#,3,4", 5, true);
    match client(&url).fetch(&query, false) {
      Err(NotesError::HttpStatus(status)) => assert_eq!("400 Bad Request", status),
      other => panic!("Expected HttpStatus error, got {:?}", other)
    }
    assert_eq!(
      "GET /api/0.6/notes.json?bbox=1%2C%202%23%2C3%2C4&limit=5&closed=1 HTTP/1.1",
      requests.recv().unwrap()
    );
  }

  #[test]
  fn connection_refused_is_a_network_error() {
    // Grab a free port then close it again.
    let port = {
      let listener = TcpListener::bind("127.0.0.1:0").unwrap();
      listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/notes.json", port);
    let query = NotesQuery::new("1,2,3,4", 5, true);
    match client(&url).fetch(&query, false) {
      Err(NotesError::Network { url, .. }) => assert!(url.ends_with("closed=1")),
      other => panic!("Expected Network error, got {:?}", other)
    }
  }

  #[test]
  fn status_check_only_accepts_200() {
    assert!(check_status(StatusCode::OK).is_ok());
    assert!(check_status(StatusCode::NO_CONTENT).is_err());
    assert!(check_status(StatusCode::NOT_MODIFIED).is_err());
  }

  #[test]
  fn dump_contains_status_headers_and_body() {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", "application/json".parse().unwrap());
    let dump = response_dump("HTTP/1.1 200 OK", &headers, b"{}");
    assert_eq!(
      "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\r\n{}",
      dump
    );
  }
}
