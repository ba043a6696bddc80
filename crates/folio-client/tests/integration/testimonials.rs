//! TestimonialsClient endpoint mapping.

use folio_client::TestimonialsClient;
use folio_core::{NewTestimonial, TestimonialId};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestBackend, testimonial_json};

#[tokio::test]
async fn test_testimonial_round() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testimonials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([testimonial_json("t1")])))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/testimonials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(testimonial_json("t2")))
        .expect(1)
        .mount(&backend.server)
        .await;
    let body = json!({"message": "Testimonial deleted successfully"});
    Mock::given(method("DELETE"))
        .and(path("/api/testimonials/t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = TestimonialsClient::new(backend.api.clone());

    let listed = client.list_all().await.unwrap();
    assert_eq!(listed[0].company, "TechCorp");

    let testimonial = NewTestimonial {
        name: "Sarah Johnson".into(),
        role: "Marketing Director".into(),
        company: "TechCorp".into(),
        message: "Exceptional work".into(),
        avatar: "https://img.test/a.png".into(),
        is_active: true,
    };
    let created = client.create(&testimonial).await.unwrap();
    assert_eq!(created.id, TestimonialId::new("t2"));

    client.delete(&created.id).await.unwrap();
}
