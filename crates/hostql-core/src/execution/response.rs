use crate::execution::ExecutionError;

/// A response borrowed from an [`Executor`](crate::Executor)'s buffers.
/// Valid until the executor runs its next request.
#[derive(Clone, Copy, Debug)]
pub struct ResponseRef<'a> {
    data: &'a str,
    errors: &'a [ExecutionError],
}

impl<'a> ResponseRef<'a> {
    pub(crate) fn new(data: &'a str, errors: &'a [ExecutionError]) -> Self {
        Self { data, errors }
    }

    /// The `data` member as JSON text.
    pub fn data(&self) -> &'a str {
        self.data
    }

    pub fn errors(&self) -> &'a [ExecutionError] {
        self.errors
    }

    /// Appends the `{"data":…,"errors":[…],"extensions":{}}` envelope.
    pub fn write_json(&self, out: &mut String) {
        write_envelope(out, self.data, self.errors);
    }

    pub fn to_json(&self) -> String {
        let mut out = String::with_capacity(self.data.len() + 48);
        self.write_json(&mut out);
        out
    }

    pub fn into_response(self) -> Response {
        Response {
            data: self.data.to_string(),
            errors: self.errors.to_vec(),
        }
    }
}

/// An owned response.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    data: String,
    errors: Vec<ExecutionError>,
}

impl Response {
    /// The `data` member as JSON text.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// The `data` member parsed into a `serde_json::Value`.
    pub fn data_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.data)
    }

    pub fn errors(&self) -> &[ExecutionError] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn write_json(&self, out: &mut String) {
        write_envelope(out, &self.data, &self.errors);
    }

    pub fn to_json(&self) -> String {
        let mut out = String::with_capacity(self.data.len() + 48);
        self.write_json(&mut out);
        out
    }
}

fn write_envelope(out: &mut String, data: &str, errors: &[ExecutionError]) {
    out.push_str("{\"data\":");
    out.push_str(data);
    out.push_str(",\"errors\":");
    match serde_json::to_string(errors) {
        Ok(errors) => out.push_str(&errors),
        Err(_) => out.push_str("[]"),
    }
    out.push_str(",\"extensions\":{}}");
}
