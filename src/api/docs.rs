use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::{protected::remedios, public};
use crate::remedio::{AtualizacaoRemedio, DetalheRemedio, Laboratorio, NovoRemedio, ResumoRemedio, Via};

/// OpenAPI document served at /v3/api-docs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Remedios API",
        description = "API para gerenciamento de remédios"
    ),
    paths(
        public::login::login,
        public::health::health,
        remedios::create::create,
        remedios::list::list,
        remedios::update::update,
        remedios::detail::detail,
        remedios::delete::delete,
        remedios::status::deactivate,
        remedios::status::activate,
    ),
    components(schemas(
        NovoRemedio,
        AtualizacaoRemedio,
        DetalheRemedio,
        ResumoRemedio,
        Via,
        Laboratorio,
        public::login::DadosAutenticacao,
        public::login::TokenResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Remedios", description = "Medication records"),
        (name = "Auth", description = "Token acquisition"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
