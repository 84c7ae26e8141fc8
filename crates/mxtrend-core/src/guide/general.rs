//! Headline development indicators shown on the landing panel.

use super::IndicatorGuideEntry;

pub(super) static ENTRIES: [IndicatorGuideEntry; 14] = [
    IndicatorGuideEntry {
        series_name: "GDP per capita, PPP (constant 2021 international $)",
        translated_label: "PIB per cápita, PPA (constante 2021 $ internacional)",
        definition: "PIB per cápita ajustado por PPA en dólares internacionales constantes de 2021.",
        purpose: "Medir el nivel de riqueza promedio ajustado por el costo de vida.",
        importance: "Refleja el bienestar económico y el nivel de vida de los ciudadanos.",
    },
    IndicatorGuideEntry {
        series_name: "GDP growth (annual %)",
        translated_label: "Crecimiento del PIB (anual %)",
        definition: "Tasa anual de crecimiento del Producto Interno Bruto.",
        purpose: "Evaluar el crecimiento económico de un país.",
        importance: "Indica la expansión económica y el desarrollo del país.",
    },
    IndicatorGuideEntry {
        series_name: "Inflation, GDP deflator (annual %)",
        translated_label: "Inflación, deflactor del PIB (anual %)",
        definition: "Tasa anual de inflación medida por el deflactor del PIB.",
        purpose: "Medir el nivel de inflación de una economía.",
        importance: "Refleja el poder adquisitivo y estabilidad económica.",
    },
    IndicatorGuideEntry {
        series_name: "Gini index",
        translated_label: "Índice de Gini",
        definition: "Medida de la desigualdad en la distribución del ingreso. __Un valor de 0 indica perfecta igualdad (todos tienen el mismo ingreso) y un valor de 100 indica perfecta desigualdad (donde una sola persona tiene todo el ingreso y los demás no tienen nada).__",
        purpose: "Medir la desigualdad económica en una sociedad.",
        importance: "Indica la equidad en la distribución de ingresos.",
    },
    IndicatorGuideEntry {
        series_name: "Control of Corruption: Estimate",
        translated_label: "Control de la Corrupción: Estimación",
        definition: "Estimación del control de la corrupción en un país. Escala de -2.5 a 2.5. __Un número más cercano a 2.5 (positivo) indica un mejor control sobre la corrupción.__",
        purpose: "Evaluar la percepción del control de la corrupción.",
        importance: "Refleja la eficacia de las políticas anticorrupción.",
    },
    IndicatorGuideEntry {
        series_name: "Control of Corruption: Percentile Rank",
        translated_label: "Control de la Corrupción: Rango Percentil",
        definition: "Rango percentil del control de la corrupción en un país. __Un número más cercano a 100 indica un mejor control sobre la corrupción__.",
        purpose: "Evaluar la posición relativa del control de la corrupción en un país.",
        importance: "Refleja la calidad de las instituciones gubernamentales.",
    },
    IndicatorGuideEntry {
        series_name: "Research and development expenditure (% of GDP)",
        translated_label: "Gasto en investigación y desarrollo (% del PIB)",
        definition: "Gasto en investigación y desarrollo como porcentaje del PIB.",
        purpose: "Medir la inversión en innovación y desarrollo.",
        importance: "Indica el compromiso con la innovación y el crecimiento económico.",
    },
    IndicatorGuideEntry {
        series_name: "Domestic general government health expenditure (% of GDP)",
        translated_label: "Gasto interno del gobierno general en salud (% del PIB)",
        definition: "Gasto del gobierno general en salud como porcentaje del PIB.",
        purpose: "Evaluar la inversión pública en salud.",
        importance: "Refleja la prioridad del gobierno en la salud pública.",
    },
    IndicatorGuideEntry {
        series_name: "Government expenditure on education, total (% of GDP)",
        translated_label: "Gasto del gobierno en educación, total (% del PIB)",
        definition: "Total del gasto gubernamental en educación en relación al PIB.",
        purpose: "Evaluar la inversión pública en educación.",
        importance: "Refleja la prioridad del gobierno en el desarrollo educativo.",
    },
    IndicatorGuideEntry {
        series_name: "Adolescents out of school (% of lower secondary school age)",
        translated_label: "Adolescentes fuera de la escuela (% de la edad de la escuela secundaria inferior)",
        definition: "Porcentaje de adolescentes de edad de secundaria inferior que no asisten a la escuela.",
        purpose: "Medir la exclusión educativa entre adolescentes.",
        importance: "Refleja el acceso y permanencia en la educación secundaria.",
    },
    IndicatorGuideEntry {
        series_name: "Literacy rate, adult total (% of people ages 15 and above)",
        translated_label: "Tasa de alfabetización, total de adultos (% de personas de 15 años y más)",
        definition: "Porcentaje de adultos de 15 años o más que pueden leer y escribir.",
        purpose: "Medir el nivel de alfabetización entre adultos.",
        importance: "Refleja el nivel de alfabetización y educación básica de los adultos.",
    },
    IndicatorGuideEntry {
        series_name: "Multidimensional poverty headcount ratio (World Bank) (% of population)",
        translated_label: "Tasa de pobreza multidimensional (Banco Mundial) (% de la población)",
        definition: "Porcentaje de la población que sufre pobreza multidimensional según el Banco Mundial.",
        purpose: "Medir la proporción de población en pobreza multidimensional.",
        importance: "Refleja múltiples dimensiones de la pobreza más allá del ingreso.",
    },
    IndicatorGuideEntry {
        series_name: "Unemployment, total (% of total labor force) (modeled ILO estimate)",
        translated_label: "Desempleo, total (% de la fuerza laboral total) (estimación OIT modelada)",
        definition: "Porcentaje de la fuerza laboral total que está desempleada según estimación modelada de la OIT.",
        purpose: "Medir la tasa de desempleo total según estimaciones internacionales.",
        importance: "Refleja la salud del mercado laboral según estándares internacionales.",
    },
    IndicatorGuideEntry {
        series_name: "Life expectancy at birth, total (years)",
        translated_label: "Esperanza de vida al nacer, total (años)",
        definition: "Número promedio de años que se espera que viva una persona desde su nacimiento.",
        purpose: "Evaluar la salud y el bienestar general de la población.",
        importance: "Indica el nivel de desarrollo y calidad de vida en el país.",
    },
];
