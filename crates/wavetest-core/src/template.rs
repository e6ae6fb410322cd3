//! Rendering of generated feature tests
//!
//! The generated file is a PHPUnit feature test: a namespace matching the
//! target folder, a faker set up in `setUp()`, and a single test method
//! performing a GET against the named route and asserting HTTP 200. The
//! body is a fixed template filled with computed fields; only the request
//! block varies with the route's path parameters.

const FEATURE_TEST_TEMPLATE: &str = r#"<?php

namespace Tests\Feature\{folder};

use Tests\TestCase;
use Illuminate\Foundation\Testing\WithFaker;
use Illuminate\Foundation\Testing\RefreshDatabase;

class {class} extends TestCase
{
    use RefreshDatabase;

    protected $faker;

    protected function setUp(): void
    {
        parent::setUp();
        $this->faker = \Faker\Factory::create();
    }

    /**
     * Test {class} endpoint.
     *
     * @return void
     */
    public function test_{class}()
    {
{request}        $response->assertStatus(200);
    }
}
"#;

/// Render the full test file body for one route.
///
/// `class_name` already carries the `Test` suffix; `parameters` are the
/// route's path parameters in URI order.
pub fn render_feature_test(
    folder: &str,
    class_name: &str,
    route_name: &str,
    parameters: &[String],
) -> String {
    FEATURE_TEST_TEMPLATE
        .replace("{folder}", folder)
        .replace("{class}", class_name)
        .replace("{request}", &render_request(route_name, parameters))
}

/// The request block: an optional faker-backed parameter array followed by
/// the GET against the named route.
fn render_request(route_name: &str, parameters: &[String]) -> String {
    if parameters.is_empty() {
        return format!("        $response = $this->get(route('{route_name}'));\n\n");
    }

    let mut block = String::from("        $parameters = [\n");
    for parameter in parameters {
        block.push_str(&format!(
            "            '{parameter}' => $this->faker->word,\n"
        ));
    }
    block.push_str("        ];\n\n");
    block.push_str(&format!(
        "        $response = $this->get(route('{route_name}', $parameters));\n\n"
    ));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_without_parameters() {
        let body = render_feature_test("Users", "CreateTest", "users.create", &[]);

        let expected = r#"<?php

namespace Tests\Feature\Users;

use Tests\TestCase;
use Illuminate\Foundation\Testing\WithFaker;
use Illuminate\Foundation\Testing\RefreshDatabase;

class CreateTest extends TestCase
{
    use RefreshDatabase;

    protected $faker;

    protected function setUp(): void
    {
        parent::setUp();
        $this->faker = \Faker\Factory::create();
    }

    /**
     * Test CreateTest endpoint.
     *
     * @return void
     */
    public function test_CreateTest()
    {
        $response = $this->get(route('users.create'));

        $response->assertStatus(200);
    }
}
"#;
        assert_eq!(body, expected);
    }

    #[test]
    fn test_render_with_parameters_binds_each_one() {
        let parameters = vec!["id".to_string(), "name".to_string()];
        let body = render_feature_test("Users", "CreateTest", "users.create", &parameters);

        assert!(body.contains("namespace Tests\\Feature\\Users;"));
        assert!(body.contains("class CreateTest extends TestCase"));
        assert!(body.contains("'id' => $this->faker->word,"));
        assert!(body.contains("'name' => $this->faker->word,"));
        assert!(body.contains("$this->get(route('users.create', $parameters));"));
        assert!(body.contains("$response->assertStatus(200);"));

        // Parameters keep URI order
        let id_at = body.find("'id'").unwrap();
        let name_at = body.find("'name'").unwrap();
        assert!(id_at < name_at);
    }

    #[test]
    fn test_render_leaves_no_placeholders() {
        let body = render_feature_test("Users", "ShowTest", "users.show", &["id".to_string()]);
        assert!(!body.contains("{folder}"));
        assert!(!body.contains("{class}"));
        assert!(!body.contains("{request}"));
    }
}
