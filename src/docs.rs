use utoipa::OpenApi;

use crate::modules::classes::model::{Class, ClassStatistics, CreateClassDto, UpdateClassDto};
use crate::modules::disciplines::model::{
    CreateDisciplineDto, Discipline, DisciplineCount, DisciplineStatistics, ResolveDisciplineDto,
    UpdateDisciplineDto,
};
use crate::modules::documents::model::Document;
use crate::modules::enums::{DisciplineType, Gender, Language, PaymentMode, Section, UserRole};
use crate::modules::equipment::model::{CreateEquipmentDto, Equipment, UpdateEquipmentDto};
use crate::modules::grades::model::{CreateGradeDto, Grade, GradeAverage, UpdateGradeDto};
use crate::modules::notifications::model::{CreateNotificationDto, Notification};
use crate::modules::payments::model::{CreatePaymentDto, Payment, PaymentTotal};
use crate::modules::purchases::model::{
    CreatePurchaseDto, Purchase, PurchaseTotal, SpendSummaryRow, UpdatePurchaseDto,
};
use crate::modules::staff::model::{CreateStaffDto, Staff, UpdateStaffDto};
use crate::modules::statistics::model::{ClassesBySection, SchoolStatistics};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use crate::modules::teachers::model::{CreateTeacherDto, Teacher, UpdateTeacherDto};
use crate::modules::users::model::{
    ChangePasswordDto, CreateUserDto, LoginDto, LoginResponse, UpdateUserDto, User,
};
use crate::utils::errors::ErrorResponse;
use crate::utils::pagination::{Paginated, PaginationMeta};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_students_paginated,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::get_students_by_class,
        crate::modules::students::controller::get_students_by_section,
        crate::modules::students::controller::get_students_by_language,
        crate::modules::students::controller::search_students,
        crate::modules::students::controller::get_student_grades,
        crate::modules::students::controller::get_student_payments,
        crate::modules::students::controller::get_student_disciplines,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::get_teacher_by_email,
        crate::modules::teachers::controller::get_teachers_by_specialization,
        crate::modules::teachers::controller::search_teachers,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::get_teacher_classes,
        crate::modules::teachers::controller::get_teacher_subjects,
        crate::modules::staff::controller::create_staff,
        crate::modules::staff::controller::get_staff_members,
        crate::modules::staff::controller::get_staff_paginated,
        crate::modules::staff::controller::get_staff_member,
        crate::modules::staff::controller::get_staff_by_department,
        crate::modules::staff::controller::get_staff_by_position,
        crate::modules::staff::controller::get_staff_by_role,
        crate::modules::staff::controller::get_staff_by_email,
        crate::modules::staff::controller::search_staff,
        crate::modules::staff::controller::update_staff,
        crate::modules::staff::controller::delete_staff,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::get_classes_by_section,
        crate::modules::classes::controller::get_classes_by_language,
        crate::modules::classes::controller::get_classes_by_section_and_language,
        crate::modules::classes::controller::get_classes_by_academic_year,
        crate::modules::classes::controller::get_classes_by_teacher,
        crate::modules::classes::controller::get_class_students,
        crate::modules::classes::controller::get_class_statistics,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::assign_teacher,
        crate::modules::classes::controller::delete_class,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::get_subjects_by_teacher,
        crate::modules::subjects::controller::get_subjects_by_section,
        crate::modules::subjects::controller::search_subjects,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::assign_subject_teacher,
        crate::modules::subjects::controller::remove_subject_teacher,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::get_grades,
        crate::modules::grades::controller::get_grade,
        crate::modules::grades::controller::get_grades_by_student,
        crate::modules::grades::controller::get_grades_by_subject,
        crate::modules::grades::controller::get_grades_by_student_and_subject,
        crate::modules::grades::controller::get_student_average,
        crate::modules::grades::controller::get_subject_average,
        crate::modules::grades::controller::update_grade,
        crate::modules::grades::controller::delete_grade,
        crate::modules::payments::controller::create_payment,
        crate::modules::payments::controller::get_payments,
        crate::modules::payments::controller::get_payments_by_student,
        crate::modules::payments::controller::get_total_paid,
        crate::modules::purchases::controller::create_purchase,
        crate::modules::purchases::controller::get_purchases,
        crate::modules::purchases::controller::get_purchase,
        crate::modules::purchases::controller::get_purchase_by_invoice,
        crate::modules::purchases::controller::get_purchases_by_date_range,
        crate::modules::purchases::controller::get_purchases_by_date_range_paginated,
        crate::modules::purchases::controller::get_purchases_by_supplier,
        crate::modules::purchases::controller::get_purchases_by_category,
        crate::modules::purchases::controller::get_purchases_by_supplier_and_date_range,
        crate::modules::purchases::controller::get_purchases_by_category_and_date_range,
        crate::modules::purchases::controller::get_total_by_date_range,
        crate::modules::purchases::controller::get_total_by_supplier,
        crate::modules::purchases::controller::get_total_by_category,
        crate::modules::purchases::controller::get_summary_by_category,
        crate::modules::purchases::controller::get_summary_by_supplier,
        crate::modules::purchases::controller::update_purchase,
        crate::modules::purchases::controller::delete_purchase,
        crate::modules::equipment::controller::create_equipment,
        crate::modules::equipment::controller::get_all_equipment,
        crate::modules::equipment::controller::get_equipment,
        crate::modules::equipment::controller::get_equipment_by_serial,
        crate::modules::equipment::controller::get_equipment_by_category,
        crate::modules::equipment::controller::get_equipment_by_location,
        crate::modules::equipment::controller::get_equipment_by_status,
        crate::modules::equipment::controller::get_equipment_by_assignee,
        crate::modules::equipment::controller::get_maintenance_due,
        crate::modules::equipment::controller::get_under_warranty,
        crate::modules::equipment::controller::update_equipment,
        crate::modules::equipment::controller::delete_equipment,
        crate::modules::disciplines::controller::create_discipline,
        crate::modules::disciplines::controller::get_disciplines,
        crate::modules::disciplines::controller::get_disciplines_paginated,
        crate::modules::disciplines::controller::get_discipline,
        crate::modules::disciplines::controller::get_disciplines_by_student,
        crate::modules::disciplines::controller::get_unresolved_by_student,
        crate::modules::disciplines::controller::count_by_student,
        crate::modules::disciplines::controller::get_disciplines_by_type,
        crate::modules::disciplines::controller::get_disciplines_by_resolved,
        crate::modules::disciplines::controller::get_disciplines_by_date_range,
        crate::modules::disciplines::controller::get_disciplines_by_date_range_paginated,
        crate::modules::disciplines::controller::get_recent_disciplines,
        crate::modules::disciplines::controller::get_pending_actions,
        crate::modules::disciplines::controller::get_statistics,
        crate::modules::disciplines::controller::resolve_discipline,
        crate::modules::disciplines::controller::update_discipline,
        crate::modules::disciplines::controller::delete_discipline,
        crate::modules::documents::controller::upload_document,
        crate::modules::documents::controller::get_documents,
        crate::modules::documents::controller::get_document,
        crate::modules::documents::controller::download_document,
        crate::modules::documents::controller::get_documents_by_student,
        crate::modules::documents::controller::get_documents_by_type,
        crate::modules::documents::controller::get_documents_by_academic_year,
        crate::modules::documents::controller::get_documents_by_student_and_type,
        crate::modules::documents::controller::get_documents_by_creator,
        crate::modules::documents::controller::delete_document,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::login,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_users_by_role,
        crate::modules::users::controller::get_active_users,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::activate_user,
        crate::modules::users::controller::deactivate_user,
        crate::modules::users::controller::delete_user,
        crate::modules::notifications::controller::create_notification,
        crate::modules::notifications::controller::get_notifications_by_user,
        crate::modules::notifications::controller::get_unread_by_user,
        crate::modules::notifications::controller::mark_as_read,
        crate::modules::notifications::controller::delete_notification,
        crate::modules::statistics::controller::get_school_statistics,
    ),
    components(
        schemas(
            Gender,
            Section,
            Language,
            UserRole,
            PaymentMode,
            DisciplineType,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            Staff,
            CreateStaffDto,
            UpdateStaffDto,
            Class,
            CreateClassDto,
            UpdateClassDto,
            ClassStatistics,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            Grade,
            CreateGradeDto,
            UpdateGradeDto,
            GradeAverage,
            Payment,
            CreatePaymentDto,
            PaymentTotal,
            Purchase,
            CreatePurchaseDto,
            UpdatePurchaseDto,
            PurchaseTotal,
            SpendSummaryRow,
            Equipment,
            CreateEquipmentDto,
            UpdateEquipmentDto,
            Discipline,
            CreateDisciplineDto,
            UpdateDisciplineDto,
            ResolveDisciplineDto,
            DisciplineCount,
            DisciplineStatistics,
            Document,
            User,
            CreateUserDto,
            UpdateUserDto,
            LoginDto,
            LoginResponse,
            ChangePasswordDto,
            Notification,
            CreateNotificationDto,
            SchoolStatistics,
            ClassesBySection,
            ErrorResponse,
            PaginationMeta,
            Paginated<Student>,
            Paginated<Staff>,
            Paginated<User>,
            Paginated<Purchase>,
            Paginated<Discipline>,
        )
    ),
    tags(
        (name = "Students", description = "Student records and enrollment"),
        (name = "Teachers", description = "Teaching staff"),
        (name = "Staff", description = "Administrative staff"),
        (name = "Classes", description = "Classes and homeroom assignment"),
        (name = "Subjects", description = "Subjects and teaching assignment"),
        (name = "Grades", description = "Grades and averages"),
        (name = "Payments", description = "Tuition and fee payments"),
        (name = "Purchases", description = "Supply purchases and spend reporting"),
        (name = "Equipment", description = "Equipment inventory"),
        (name = "Disciplines", description = "Disciplinary incidents"),
        (name = "Documents", description = "Uploaded documents"),
        (name = "Users", description = "Accounts and login"),
        (name = "Notifications", description = "Per-user notifications"),
        (name = "Statistics", description = "School-wide statistics")
    ),
    info(
        title = "Scolaris API",
        description = "REST backend for a K-12 school's administrative system",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
