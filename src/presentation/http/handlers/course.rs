//! Course Handlers
//!
//! HTTP handlers for the course resource.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{
    CourseQueryParams, CourseResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::application::services::{
    CourseError, CourseService, CourseServiceImpl, CreateCourseDto, UpdateCourseDto,
};
use crate::domain::CourseRepository;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Helper to convert CourseError to AppError
fn map_course_error(e: CourseError) -> AppError {
    match e {
        CourseError::NotFound(id) => AppError::NotFound(format!("Course {} not found", id)),
        CourseError::Invalid { field, reason } => AppError::field(field, reason.to_string()),
        CourseError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Path ids that do not parse cannot match any course.
fn parse_course_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Course {} not found", raw)))
}

fn course_service(state: &AppState) -> CourseServiceImpl<dyn CourseRepository> {
    CourseServiceImpl::new(state.courses.clone())
}

/// List courses
///
/// GET /api/v1/courses/
///
/// ## Query Parameters
/// - `id` (optional): exact id match
/// - `name` (optional): exact name match
pub async fn list_courses(
    State(state): State<AppState>,
    query: Result<Query<CourseQueryParams>, QueryRejection>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let filter = params.into_filter()?;

    let courses = course_service(&state)
        .list_courses(filter)
        .await
        .map_err(map_course_error)?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get course by ID
///
/// GET /api/v1/courses/{course_id}/
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let course_id = parse_course_id(&course_id)?;

    let course = course_service(&state)
        .get_course(course_id)
        .await
        .map_err(map_course_error)?;

    Ok(Json(CourseResponse::from(course)))
}

/// Create a new course
///
/// POST /api/v1/courses/
///
/// ## Request Body
/// - `name`: required, non-blank
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let request = CreateCourseDto {
        // `required` has already run
        name: body.name.unwrap_or_default(),
    };

    let course = course_service(&state)
        .create_course(request)
        .await
        .map_err(map_course_error)?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// Update the supplied fields of a course
///
/// PATCH /api/v1/courses/{course_id}/
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateCourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let course_id = parse_course_id(&course_id)?;

    let update = UpdateCourseDto { name: body.name };

    let course = course_service(&state)
        .update_course(course_id, update)
        .await
        .map_err(map_course_error)?;

    Ok(Json(CourseResponse::from(course)))
}

/// Replace a course
///
/// PUT /api/v1/courses/{course_id}/
///
/// Every mutable field must be present, as on create.
pub async fn replace_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CreateCourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let course_id = parse_course_id(&course_id)?;

    let update = UpdateCourseDto { name: body.name };

    let course = course_service(&state)
        .update_course(course_id, update)
        .await
        .map_err(map_course_error)?;

    Ok(Json(CourseResponse::from(course)))
}

/// Delete a course
///
/// DELETE /api/v1/courses/{course_id}/
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let course_id = parse_course_id(&course_id)?;

    course_service(&state)
        .delete_course(course_id)
        .await
        .map_err(map_course_error)?;

    Ok(StatusCode::NO_CONTENT)
}
