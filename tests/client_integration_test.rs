use bestiary_soap::core::dispatcher::HttpDispatcher;
use bestiary_soap::domain::model::{Namespaces, MISSING_FIELD};
use bestiary_soap::{BestiaryClient, SearchCriteria, SoapError, TomlConfig};
use httpmock::prelude::*;
use std::time::Duration;

const SEARCH_RESPONSE: &str = r#"<?xml version="1.0" ?>
<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">
  <S:Body>
    <ns2:PesquisarClassesResponse xmlns:ns2="http://bestiario.rpg.com/">
      <return>
        <ns2:Nome>Mago</ns2:Nome>
        <ns2:DadoVida>d6</ns2:DadoVida>
        <ns2:AtributoPrimario>Inteligência</ns2:AtributoPrimario>
        <ns2:Foco>Magia Arcana</ns2:Foco>
      </return>
    </ns2:PesquisarClassesResponse>
  </S:Body>
</S:Envelope>"#;

const LIST_RESPONSE: &str = r#"<?xml version="1.0" ?>
<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">
  <S:Body>
    <ns2:ListarTodasAsClassesResponse xmlns:ns2="http://bestiario.rpg.com/">
      <return><ns2:Nome>Bárbaro</ns2:Nome><ns2:DadoVida>d12</ns2:DadoVida><ns2:AtributoPrimario>Força</ns2:AtributoPrimario><ns2:Foco>Combate Marcial</ns2:Foco></return>
      <return><ns2:Nome>Clérigo</ns2:Nome><ns2:DadoVida>d8</ns2:DadoVida><ns2:AtributoPrimario>Sabedoria</ns2:AtributoPrimario></return>
    </ns2:ListarTodasAsClassesResponse>
  </S:Body>
</S:Envelope>"#;

const FAULT_RESPONSE: &str = r#"<?xml version="1.0" ?>
<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">
  <S:Body>
    <S:Fault xmlns:ns4="http://www.w3.org/2003/05/soap-envelope">
      <faultcode>S:Server</faultcode>
      <faultstring>Unknown criteria</faultstring>
    </S:Fault>
  </S:Body>
</S:Envelope>"#;

fn client_for(server: &MockServer) -> BestiaryClient<HttpDispatcher> {
    let config = TomlConfig::default().with_endpoint(server.url("/soap"));
    BestiaryClient::from_config(&config)
}

#[tokio::test]
async fn test_search_round_trip() {
    let server = MockServer::start();
    let soap_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("content-type", "text/xml; charset=utf-8")
            .header("soapaction", "\"http://bestiario.rpg.com/PesquisarClasses\"")
            .body_contains("<ns:PesquisarClasses>")
            .body_contains("<Nome>Mago</Nome>")
            .body_contains("<AtributoPrimario></AtributoPrimario>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(SEARCH_RESPONSE);
    });

    let outcome = client_for(&server)
        .search(SearchCriteria::new("Mago", ""))
        .await
        .unwrap();

    soap_mock.assert();
    let records = outcome.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Mago");
    assert_eq!(records[0].life_die, "d6");
    assert_eq!(records[0].primary_attribute, "Inteligência");
    assert_eq!(records[0].focus, "Magia Arcana");
}

#[tokio::test]
async fn test_list_all_with_partial_record() {
    let server = MockServer::start();
    let soap_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("soapaction", "\"http://bestiario.rpg.com/ListarTodasAsClasses\"")
            .body_contains("<ns:ListarTodasAsClasses/>");
        then.status(200).body(LIST_RESPONSE);
    });

    let outcome = client_for(&server).list_all().await.unwrap();

    soap_mock.assert();
    let records = outcome.records().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].is_complete());
    assert_eq!(records[1].name, "Clérigo");
    assert_eq!(records[1].focus, MISSING_FIELD);
}

#[tokio::test]
async fn test_escaped_criteria_reach_the_server() {
    let server = MockServer::start();
    let soap_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .body_contains("<Nome>&lt;b&gt;Mago&lt;/b&gt;</Nome>")
            .body_contains("<AtributoPrimario>Força &amp; Destreza</AtributoPrimario>");
        then.status(200).body(SEARCH_RESPONSE);
    });

    client_for(&server)
        .search(SearchCriteria::new("<b>Mago</b>", "Força & Destreza"))
        .await
        .unwrap();

    soap_mock.assert();
}

#[tokio::test]
async fn test_server_fault_is_returned_as_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(500).body(FAULT_RESPONSE);
    });

    let outcome = client_for(&server)
        .search(SearchCriteria::new("Paladino", ""))
        .await
        .unwrap();

    assert!(outcome.records().is_none());
    let fault = outcome.fault().unwrap();
    assert_eq!(fault.status, 500);
    assert_eq!(fault.message.as_deref(), Some("Unknown criteria"));
}

#[tokio::test]
async fn test_fault_without_faultstring() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(503).body(concat!(
            r#"<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">"#,
            "<S:Body/></S:Envelope>",
        ));
    });

    let outcome = client_for(&server).list_all().await.unwrap();

    let fault = outcome.fault().unwrap();
    assert_eq!(fault.status, 503);
    assert!(fault.message.is_none());
}

#[tokio::test]
async fn test_unparsable_body_is_malformed_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(502).body("Bad Gateway");
    });

    let err = client_for(&server).list_all().await.unwrap_err();

    assert!(matches!(err, SoapError::MalformedResponse { status: 502, .. }));
    assert_eq!(err.raw_response(), Some("Bad Gateway"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // grab a free port, then release it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = TomlConfig::default().with_endpoint(format!("http://127.0.0.1:{}/soap", port));
    let client = BestiaryClient::from_config(&config);

    let err = client.list_all().await.unwrap_err();

    assert!(matches!(err, SoapError::TransportError { .. }));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200)
            .body(SEARCH_RESPONSE)
            .delay(Duration::from_secs(3));
    });

    let dispatcher = HttpDispatcher::new(
        server.url("/soap"),
        "http://bestiario.rpg.com/",
        Duration::from_millis(200),
    );
    let client = BestiaryClient::new(dispatcher, Namespaces::default());

    let err = client.search(SearchCriteria::new("Mago", "")).await.unwrap_err();

    assert!(matches!(err, SoapError::TransportError { .. }));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_calls_are_independent() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200).body("<truncated");
    });

    let client = client_for(&server);
    assert!(client.list_all().await.is_err());

    failing.delete();
    server.mock(|when, then| {
        when.method(POST).path("/soap");
        then.status(200).body(LIST_RESPONSE);
    });

    let outcome = client.list_all().await.unwrap();
    assert_eq!(outcome.records().unwrap().len(), 2);
}
