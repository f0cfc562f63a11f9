use actix_web::{HttpResponse, Responder, web};

use crate::schedule::ScheduleEntry;

/// Today's timetable
#[utoipa::path(
    get,
    path = "/api/schedule",
    responses(
        (status = 200, description = "The configured timetable, fixed order", body = [ScheduleEntry])
    ),
    tag = "Schedule"
)]
pub async fn today_schedule(timetable: web::Data<Vec<ScheduleEntry>>) -> impl Responder {
    HttpResponse::Ok().json(timetable.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::builtin_schedule;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn returns_the_loaded_timetable_verbatim() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(builtin_schedule()))
                .route("/api/schedule", web::get().to(today_schedule)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/schedule").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0]["time"], "09:00 AM");
        assert_eq!(entries[0]["subject"], "Mathematics");
        assert_eq!(entries[3]["room"], "Room 305");
    }
}
