use std::{collections::BTreeMap, sync::Mutex};

use ssmps::{
    LookupError, Output, fetch,
    store::{
        adapters::in_memory_store::InMemoryParameterStore,
        repository::{GetParametersOutput, Parameter, ParameterStore, StoreError},
    },
};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn test_store() -> InMemoryParameterStore {
    InMemoryParameterStore::with_parameters([
        ("/billing/prod/db_url", "postgres://billing"),
        ("/billing/prod/api_key", "s3cr3t"),
        ("/shared/region", "ap-southeast-1"),
        ("/shared/region:eu", "eu-west-1"),
    ])
}

/// Records every batch it receives and fails on the given call number.
struct RecordingStore {
    inner: InMemoryParameterStore,
    batches: Mutex<Vec<Vec<String>>>,
    fail_on_call: Option<(usize, StoreError)>,
}

impl RecordingStore {
    fn new(inner: InMemoryParameterStore) -> Self {
        Self {
            inner,
            batches: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    fn failing_on(mut self, call: usize, err: StoreError) -> Self {
        self.fail_on_call = Some((call, err));
        self
    }

    fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ParameterStore for RecordingStore {
    async fn get_parameter(&self, name: &str) -> Result<Parameter, StoreError> {
        self.inner.get_parameter(name).await
    }

    async fn get_parameters(&self, names: &[String]) -> Result<GetParametersOutput, StoreError> {
        let call = {
            let mut batches = self.batches.lock().unwrap();
            batches.push(names.to_vec());
            batches.len()
        };

        match &self.fail_on_call {
            Some((fail_call, err)) if *fail_call == call => Err(err.clone()),
            _ => self.inner.get_parameters(names).await,
        }
    }
}

#[tokio::test]
async fn test_multiple_names_print_json_object() {
    let store = test_store();

    let output = fetch(&store, "billing/prod", &names(&["db_url", "api_key", "missing"]))
        .await
        .unwrap();

    assert_eq!(
        output.render().unwrap(),
        "{\"api_key\":\"s3cr3t\",\"db_url\":\"postgres://billing\",\"missing\":\"\"}\n"
    );
}

#[tokio::test]
async fn test_absolute_and_relative_names_mix() {
    let store = test_store();

    let output = fetch(&store, "/billing/prod/", &names(&["db_url", "/shared/region"]))
        .await
        .unwrap();

    let Output::Multiple(values) = output else {
        panic!("expected multiple values");
    };
    assert_eq!(values["db_url"], "postgres://billing");
    assert_eq!(values["/shared/region"], "ap-southeast-1");
}

#[tokio::test]
async fn test_single_name_prints_raw_value() {
    let store = test_store();

    let output = fetch(&store, "", &names(&["shared/region:eu"])).await.unwrap();

    assert_eq!(output.render().unwrap(), "eu-west-1\n");
}

#[tokio::test]
async fn test_single_missing_name_prints_empty_line() {
    let store = test_store();

    let output = fetch(&store, "billing/prod", &names(&["nope"])).await.unwrap();

    assert_eq!(output, Output::Single(String::new()));
    assert_eq!(output.render().unwrap(), "\n");
}

#[tokio::test]
async fn test_shared_path_is_requested_once() {
    let store = RecordingStore::new(test_store());

    let output = fetch(
        &store,
        "billing/prod",
        &names(&["db_url", "/billing/prod/db_url", "db_url"]),
    )
    .await
    .unwrap();

    assert_eq!(store.batches(), vec![names(&["/billing/prod/db_url"])]);
    assert_eq!(
        output,
        Output::Multiple(BTreeMap::from([
            ("db_url".to_string(), "postgres://billing".to_string()),
            (
                "/billing/prod/db_url".to_string(),
                "postgres://billing".to_string()
            ),
        ]))
    );
}

#[tokio::test]
async fn test_many_names_are_batched_by_ten() {
    let mut inner = InMemoryParameterStore::new();
    for i in 0..25 {
        inner.insert(format!("/bulk/p{i}"), format!("v{i}"));
    }
    let store = RecordingStore::new(inner);
    let requested: Vec<String> = (0..25).map(|i| format!("p{i}")).collect();

    let output = fetch(&store, "bulk", &requested).await.unwrap();

    let sizes: Vec<usize> = store.batches().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![10, 10, 5]);
    assert_eq!(store.batches()[0][0], "/bulk/p0");

    let Output::Multiple(values) = output else {
        panic!("expected multiple values");
    };
    assert_eq!(values.len(), 25);
    assert_eq!(values["p24"], "v24");
}

#[tokio::test]
async fn test_failure_in_later_batch_discards_everything() {
    let mut inner = InMemoryParameterStore::new();
    for i in 0..15 {
        inner.insert(format!("/p{i}"), "x");
    }
    let store = RecordingStore::new(inner)
        .failing_on(2, StoreError::service("ThrottlingException", "Rate exceeded"));
    let requested: Vec<String> = (0..15).map(|i| format!("p{i}")).collect();

    let err = fetch(&store, "", &requested).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "ssmps returned error: ThrottlingException message: Rate exceeded"
    );
    assert_eq!(store.batches().len(), 2);
}

#[tokio::test]
async fn test_transport_failure_is_unknown_error() {
    let store = RecordingStore::new(test_store())
        .failing_on(1, StoreError::Unknown("dispatch failure: connection refused".to_string()));

    let err = fetch(&store, "", &names(&["a", "b"])).await.unwrap_err();

    assert!(matches!(err, LookupError::Unknown { .. }));
    assert!(err.to_string().contains("returned unknown error"));
}

#[tokio::test]
async fn test_no_names_fails_before_any_request() {
    let store = RecordingStore::new(test_store());

    let err = fetch(&store, "", &[]).await.unwrap_err();

    assert!(matches!(err, LookupError::InvalidArgument(_)));
    assert!(store.batches().is_empty());
}
