use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A pending request whose JSON body decodes into `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(&self.builder, f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_form<Q>(mut self, form: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.form(form);
		self
	}

	pub async fn send(self) -> Result<T, Error> {
		let response = self.builder.send().await?;
		let text = response.text().await?;
		serde_json::from_str(&text).map_err(|err| Error::InvalidJson(InvalidJson(text, err)))
	}
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error(transparent)]
	InvalidJson(InvalidJson),
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
