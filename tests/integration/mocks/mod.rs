pub mod gemini_mock;

pub use gemini_mock::{
    generate_content_response, setup_failing_gemini_mock, setup_gemini_mock, IMAGE_MODEL,
    TEST_API_KEY, TEXT_MODEL,
};
